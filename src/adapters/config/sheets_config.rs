use thiserror::Error;

use crate::domain::{
    guests::{GuestSchema, SchemaError},
    sheets::cell_range::{CellRange, CellRangeParseError},
};

const DEFAULT_RANGE: &str = "A1:J101";

#[derive(serde::Deserialize, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    pub sheet_name: Box<str>,
    /// Path to a service account JSON key. Takes precedence over the inline pair below.
    #[serde(default)]
    pub priv_key: Option<Box<str>>,
    #[serde(default)]
    pub client_email: Option<Box<str>>,
    #[serde(default)]
    pub private_key: Option<Box<str>>,
    #[serde(default = "default_range")]
    pub range: Box<str>,
    #[serde(default = "default_schema")]
    pub schema: Vec<String>,
}

fn default_range() -> Box<str> {
    DEFAULT_RANGE.into()
}

fn default_schema() -> Vec<String> {
    GuestSchema::default().fields().to_vec()
}

// Keys stay out of logs: the manager is `#[instrument]`ed with its config.
impl std::fmt::Debug for SpreadsheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("sheet_name", &self.sheet_name)
            .field("priv_key", &self.priv_key)
            .field("client_email", &self.client_email)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("range", &self.range)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    KeyFile(String),
    Inline {
        client_email: String,
        private_key: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("No service account configured: set sheets.priv_key or sheets.client_email and sheets.private_key")]
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub range: CellRange,
    pub schema: GuestSchema,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetLayoutError {
    #[error("Invalid sheets.range: {0}")]
    Range(CellRangeParseError),
    #[error("Invalid sheets.schema: {0}")]
    Schema(SchemaError),
    #[error("sheets.range spans {columns} columns but sheets.schema lists {fields} fields")]
    WidthMismatch { columns: u32, fields: usize },
}

impl SpreadsheetConfig {
    pub fn credentials(&self) -> Result<Credentials, CredentialsError> {
        if let Some(path) = &self.priv_key {
            return Ok(Credentials::KeyFile(path.to_string()));
        }

        match (&self.client_email, &self.private_key) {
            (Some(client_email), Some(private_key)) => Ok(Credentials::Inline {
                client_email: client_email.to_string(),
                // Keys pasted into env files usually carry escaped newlines.
                private_key: private_key.replace("\\n", "\n"),
            }),
            _ => Err(CredentialsError::Missing),
        }
    }

    /// Range bound to the configured sheet, plus the header schema it must hold.
    pub fn layout(&self) -> Result<SheetLayout, SheetLayoutError> {
        let range = self
            .range
            .parse::<CellRange>()
            .map_err(SheetLayoutError::Range)?
            .with_sheet_title(self.sheet_name.to_string());
        let schema = GuestSchema::new(self.schema.as_slice()).map_err(SheetLayoutError::Schema)?;

        if range.column_count() as usize != schema.width() {
            return Err(SheetLayoutError::WidthMismatch {
                columns: range.column_count(),
                fields: schema.width(),
            });
        }

        Ok(SheetLayout { range, schema })
    }
}
