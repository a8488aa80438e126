use std::str::FromStr;

use thiserror::Error;

use super::{
    a1_notation::{A1Notation, ToA1Notation},
    cell_position::{CellPosition, CellPositionParseError},
};

/// Rectangular window such as `A1:J101`, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
    pub sheet_title: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellRangeParseError {
    #[error("Expected a range like 'A1:J101', got '{0}'")]
    MissingSeparator(String),
    #[error("Invalid start cell: {0}")]
    Start(CellPositionParseError),
    #[error("Invalid end cell: {0}")]
    End(CellPositionParseError),
    #[error("Range end lies before its start")]
    Inverted,
}

impl CellRange {
    pub fn column_count(&self) -> u32 {
        self.end.col.value() - self.start.col.value() + 1
    }

    pub fn with_sheet_title(&self, sheet_title: impl Into<String>) -> Self {
        Self {
            start: self.start,
            end: self.end,
            sheet_title: Some(sheet_title.into()),
        }
    }
}

impl FromStr for CellRange {
    type Err = CellRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| CellRangeParseError::MissingSeparator(s.to_owned()))?;

        let start: CellPosition = start.parse().map_err(CellRangeParseError::Start)?;
        let end: CellPosition = end.parse().map_err(CellRangeParseError::End)?;

        if end.col < start.col || end.row < start.row {
            return Err(CellRangeParseError::Inverted);
        }

        Ok(CellRange {
            start,
            end,
            sheet_title: None,
        })
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        let sheet_name = sheet_name.or(self.sheet_title.as_deref());
        A1Notation::with_sheet(
            sheet_name,
            &format!(
                "{}{}:{}{}",
                self.start.col, self.start.row, self.end.col, self.end.row
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let range: CellRange = "A1:J101".parse().unwrap();
        assert_eq!(range.column_count(), 10);
        assert_eq!(range.start.row.row(), 1);
        assert_eq!(range.end.row.row(), 101);
        assert_eq!(range.sheet_title, None);
    }

    #[test]
    fn test_parse_range_errors() {
        assert!(matches!(
            "A1".parse::<CellRange>(),
            Err(CellRangeParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "1:J101".parse::<CellRange>(),
            Err(CellRangeParseError::Start(_))
        ));
        assert!(matches!(
            "A1:J".parse::<CellRange>(),
            Err(CellRangeParseError::End(_))
        ));
        assert_eq!(
            "J101:A1".parse::<CellRange>(),
            Err(CellRangeParseError::Inverted)
        );
    }

    #[test]
    fn test_range_to_a1_notation_uses_sheet_title() {
        let range: CellRange = "A1:J101".parse().unwrap();
        assert_eq!(range.to_a1_notation(None).as_ref(), "A1:J101");

        let range = range.with_sheet_title("Gasten");
        assert_eq!(range.to_a1_notation(None).as_ref(), "'Gasten'!A1:J101");
        assert_eq!(
            range.to_a1_notation(Some("Other")).as_ref(),
            "'Other'!A1:J101"
        );
    }
}
