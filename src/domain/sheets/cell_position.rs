use std::str::FromStr;

use thiserror::Error;

use super::{
    column::{parse_col, Column, ColumnParseError},
    row::{Row, RowParseError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellPositionParseError {
    #[error("Missing row number in cell '{0}'")]
    MissingRow(String),
    #[error("Error parsing column: {0}")]
    ColumnParseError(ColumnParseError),
    #[error("Error parsing row: {0}")]
    RowParseError(RowParseError),
}

impl FromStr for CellPosition {
    type Err = CellPositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| CellPositionParseError::MissingRow(s.to_owned()))?;
        let (col, row) = s.split_at(split);

        Ok(CellPosition {
            col: parse_col(col).map_err(CellPositionParseError::ColumnParseError)?,
            row: row.parse().map_err(CellPositionParseError::RowParseError)?,
        })
    }
}
