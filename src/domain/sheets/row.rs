use std::{fmt::Formatter, num::ParseIntError, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Row {
    index: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowParseError {
    #[error("Row is not a number: {0}")]
    NotANumber(ParseIntError),
    #[error("Row numbers start at 1")]
    Zero,
}

impl Row {
    pub fn from_index(index: u32) -> Self {
        Row { index }
    }

    pub fn from_row_str(row: &str) -> Result<Self, RowParseError> {
        let row = row.parse::<u32>().map_err(RowParseError::NotANumber)?;
        if row == 0 {
            return Err(RowParseError::Zero);
        }
        Ok(Row { index: row - 1 })
    }

    /// Returns the row number as a 1-based index, as written in A1 notation.
    /// # Examples
    /// ```
    /// use wedding_rsvp::domain::sheets::row::Row;
    /// let row = Row::from_index(0);
    /// assert_eq!(row.row(), 1);
    /// let row = Row::from_index(100);
    /// assert_eq!(row.row(), 101);
    /// ```
    pub fn row(&self) -> u32 {
        self.index.saturating_add(1)
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.row())
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row(index: {}, row: {})", self.index(), self.row())
    }
}

impl FromStr for Row {
    type Err = RowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Row::from_row_str(s)
    }
}
