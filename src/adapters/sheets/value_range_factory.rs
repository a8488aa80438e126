use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::domain::sheets::a1_notation::A1Notation;

pub trait ValueRangeFactory {
    fn from_rows<T: AsRef<str>>(range: &A1Notation, rows: &[Vec<T>]) -> Self;
}

fn rows_to_values<T: AsRef<str>>(rows: &[Vec<T>]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| Value::String(cell.as_ref().to_owned()))
                .collect()
        })
        .collect()
}

impl ValueRangeFactory for ValueRange {
    fn from_rows<T: AsRef<str>>(range: &A1Notation, rows: &[Vec<T>]) -> Self {
        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(range.to_string()),
            values: Some(rows_to_values(rows)),
        }
    }
}
