use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(String);

impl A1Notation {
    /// Prefixes `local` with a quoted sheet title when one is given.
    /// Single quotes inside the title are doubled, as Sheets expects.
    pub fn with_sheet(sheet_name: Option<&str>, local: &str) -> Self {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!(
                "'{}'!{}",
                sheet_name.replace('\'', "''"),
                local
            )),
            None => A1Notation(local.to_owned()),
        }
    }
}

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_sheet_quotes_title() {
        assert_eq!(
            A1Notation::with_sheet(Some("Guest list"), "A1:J101").to_string(),
            "'Guest list'!A1:J101"
        );
        assert_eq!(
            A1Notation::with_sheet(Some("Alder's"), "A1").to_string(),
            "'Alder''s'!A1"
        );
        assert_eq!(A1Notation::with_sheet(None, "A1").to_string(), "A1");
    }
}
