use strum::IntoEnumIterator;
use thiserror::Error;

use super::activity::Activity;

pub const ID: &str = "id";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const HOUSEHOLD_ID: &str = "householdId";
pub const INVITED_FOR: &str = "invitedFor";

const REQUIRED_FIELDS: [&str; 5] = [ID, FIRST_NAME, LAST_NAME, HOUSEHOLD_ID, INVITED_FOR];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Schema must start with '{ID}'")]
    IdNotFirst,
    #[error("Schema is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Schema lists field '{0}' more than once")]
    DuplicateField(String),
    #[error("Schema must end with the attendance columns {expected:?}")]
    AttendanceColumnsNotTrailing { expected: Vec<String> },
    #[error("Header has {found} columns, expected {expected}")]
    HeaderWidth { expected: usize, found: usize },
    #[error("Header column {position} is '{found}', expected '{expected}'")]
    HeaderMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

/// Ordered column names the guest sheet must carry.
///
/// The first column holds the guest id and the last four hold the per-activity
/// attendance, in [`Activity`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSchema {
    fields: Vec<String>,
}

impl Default for GuestSchema {
    fn default() -> Self {
        let mut fields: Vec<String> = REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect();
        fields.push("email".to_owned());
        fields.extend(Activity::iter().map(|a| a.to_string()));
        GuestSchema { fields }
    }
}

impl GuestSchema {
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Result<Self, SchemaError> {
        let fields: Vec<String> = fields.iter().map(|f| f.as_ref().trim().to_owned()).collect();

        if fields.first().map(String::as_str) != Some(ID) {
            return Err(SchemaError::IdNotFirst);
        }
        for required in REQUIRED_FIELDS {
            if !fields.iter().any(|f| f == required) {
                return Err(SchemaError::MissingField(required));
            }
        }
        for (index, field) in fields.iter().enumerate() {
            if fields[..index].contains(field) {
                return Err(SchemaError::DuplicateField(field.clone()));
            }
        }

        let expected: Vec<String> = Activity::iter().map(|a| a.to_string()).collect();
        if fields.len() < expected.len() || fields[fields.len() - expected.len()..] != expected[..]
        {
            return Err(SchemaError::AttendanceColumnsNotTrailing { expected });
        }

        Ok(GuestSchema { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Index of the first attendance column; the rest follow in [`Activity`] order.
    pub fn attendance_start(&self) -> usize {
        self.fields.len() - Activity::iter().count()
    }

    /// Trailing blank header cells are tolerated, anything else must match exactly.
    pub fn validate_header(&self, header: &[String]) -> Result<(), SchemaError> {
        let found = header
            .iter()
            .rposition(|cell| !cell.trim().is_empty())
            .map_or(0, |last| last + 1);

        if found != self.fields.len() {
            return Err(SchemaError::HeaderWidth {
                expected: self.fields.len(),
                found,
            });
        }

        for (position, (expected, found)) in self.fields.iter().zip(header).enumerate() {
            if expected != found.trim() {
                return Err(SchemaError::HeaderMismatch {
                    position,
                    expected: expected.clone(),
                    found: found.trim().to_owned(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_default_schema() {
        let schema = GuestSchema::default();
        assert_eq!(schema.width(), 10);
        assert_eq!(schema.attendance_start(), 6);
        assert_eq!(GuestSchema::new(schema.fields()), Ok(schema));
    }

    #[test]
    fn test_new_rejects_bad_layouts() {
        assert_eq!(
            GuestSchema::new(&["firstName", "id"]),
            Err(SchemaError::IdNotFirst)
        );
        assert_eq!(
            GuestSchema::new(&["id", "firstName", "lastName", "invitedFor"]),
            Err(SchemaError::MissingField(HOUSEHOLD_ID))
        );
        assert!(matches!(
            GuestSchema::new(&[
                "id", "firstName", "lastName", "householdId", "invitedFor", "party", "ceremony",
                "diner", "antwerp"
            ]),
            Err(SchemaError::AttendanceColumnsNotTrailing { .. })
        ));
        assert_eq!(
            GuestSchema::new(&[
                "id", "firstName", "lastName", "householdId", "invitedFor", "id", "antwerp",
                "ceremony", "diner", "party"
            ]),
            Err(SchemaError::DuplicateField("id".to_owned()))
        );
    }

    #[test]
    fn test_validate_header_accepts_matching_row() {
        let schema = GuestSchema::default();
        let mut row = schema.fields().to_vec();
        row[1] = " firstName ".to_owned();
        row.push(String::new());
        assert_eq!(schema.validate_header(&row), Ok(()));
    }

    #[test]
    fn test_validate_header_reports_mismatch() {
        let schema = GuestSchema::default();
        let mut row = schema.fields().to_vec();
        row[3] = "household".to_owned();

        assert_eq!(
            schema.validate_header(&row),
            Err(SchemaError::HeaderMismatch {
                position: 3,
                expected: "householdId".to_owned(),
                found: "household".to_owned(),
            })
        );
    }

    #[test]
    fn test_validate_header_reports_width() {
        let schema = GuestSchema::default();
        assert_eq!(
            schema.validate_header(&header(&["id", "firstName"])),
            Err(SchemaError::HeaderWidth {
                expected: 10,
                found: 2
            })
        );
    }
}
