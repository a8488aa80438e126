use std::collections::HashMap;

use thiserror::Error;

use super::{
    activity::{ActivitySet, UnknownActivity},
    guest::Guest,
    schema::{self, GuestSchema, SchemaError},
};
use crate::domain::sheets::Grid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuestMapperError {
    #[error("Sheet has no header row")]
    MissingHeader,
    #[error("Unexpected header: {0}")]
    Schema(#[from] SchemaError),
    #[error("Row {row}: '{field}' is not an integer: '{value}'")]
    InvalidInteger {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("Row {row}: {source}")]
    UnknownActivity {
        row: usize,
        #[source]
        source: UnknownActivity,
    },
}

/// Turns a raw grid into guests, one per non-blank data row, in row order.
///
/// Row numbers in errors are 1-based grid positions, header included.
pub fn map_guests(grid: &Grid, schema: &GuestSchema) -> Result<Vec<Guest>, GuestMapperError> {
    let (header, rows) = grid.split_first().ok_or(GuestMapperError::MissingHeader)?;
    schema.validate_header(header)?;

    rows.iter()
        .enumerate()
        .filter(|(_, cells)| cells.iter().any(|cell| !cell.trim().is_empty()))
        .map(|(index, cells)| {
            let record: HashMap<&str, &str> = header
                .iter()
                .map(|name| name.trim())
                .zip(cells.iter().map(String::as_str))
                .collect();
            map_guest(index + 2, &record)
        })
        .collect()
}

fn map_guest(row: usize, record: &HashMap<&str, &str>) -> Result<Guest, GuestMapperError> {
    let text = |field: &str| record.get(field).map_or(String::new(), |v| v.trim().to_owned());

    let invited_for = ActivitySet::parse_cell(record.get(schema::INVITED_FOR).unwrap_or(&""))
        .map_err(|source| GuestMapperError::UnknownActivity { row, source })?;

    Ok(Guest {
        id: integer(row, schema::ID, record)?,
        first_name: text(schema::FIRST_NAME),
        last_name: text(schema::LAST_NAME),
        household_id: integer(row, schema::HOUSEHOLD_ID, record)?,
        invited_for,
    })
}

fn integer(
    row: usize,
    field: &'static str,
    record: &HashMap<&str, &str>,
) -> Result<i64, GuestMapperError> {
    let value = record.get(field).copied().unwrap_or_default();
    value
        .trim()
        .parse()
        .map_err(|_| GuestMapperError::InvalidInteger {
            row,
            field,
            value: value.to_owned(),
        })
}
