use std::fmt::Formatter;

use thiserror::Error;

/// 1-based spreadsheet column (`A` = 1).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The column `columns` places to the right.
    pub fn offset(&self, columns: u32) -> Column {
        Column(self.0 + columns)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", number_to_letters(self.0))
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column(u32: {}, letters: {})", self.0, self)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnParseError {
    #[error("Empty column")]
    Empty,
    #[error("Non-alphabetic character in column")]
    NonAlphabeticCharacter,
    #[error("Column out of range")]
    Overflow,
}

pub fn parse_col<T: AsRef<str>>(col_str: T) -> Result<Column, ColumnParseError> {
    let col_str = col_str.as_ref();
    if col_str.is_empty() {
        return Err(ColumnParseError::Empty);
    }
    if col_str.chars().any(|c| !c.is_ascii_alphabetic()) {
        return Err(ColumnParseError::NonAlphabeticCharacter);
    }

    col_str
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .try_fold(0u32, |acc, c| {
            acc.checked_mul(26)
                .and_then(|acc| acc.checked_add(c as u32 - 'A' as u32 + 1))
        })
        .map(Column)
        .ok_or(ColumnParseError::Overflow)
}

fn number_to_letters(number: u32) -> String {
    let mut number = number;
    let mut result = String::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        result.push((remainder as u8 + b'A') as char);
        number = (number - remainder) / 26;
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_display() {
        assert_eq!(Column(1).to_string(), "A");
        assert_eq!(Column(10).to_string(), "J");
        assert_eq!(Column(26).to_string(), "Z");
        assert_eq!(Column(27).to_string(), "AA");
        assert_eq!(Column(26 * 2 + 1).to_string(), "BA");
    }

    #[test]
    fn test_parse_col_valid() {
        assert_eq!(parse_col("A").unwrap(), Column(1));
        assert_eq!(parse_col("j").unwrap(), Column(10));
        assert_eq!(parse_col("AB").unwrap(), Column(28));
        assert_eq!(parse_col("Zz").unwrap(), Column(26 * 26 + 26));
    }

    #[test]
    fn test_parse_col_invalid() {
        assert_eq!(parse_col("A1"), Err(ColumnParseError::NonAlphabeticCharacter));
        assert_eq!(parse_col("$"), Err(ColumnParseError::NonAlphabeticCharacter));
        assert_eq!(parse_col(""), Err(ColumnParseError::Empty));
        assert_eq!(parse_col("ZZZZZZZZZZ"), Err(ColumnParseError::Overflow));
    }

    #[test]
    fn test_column_offset() {
        assert_eq!(Column(1).offset(6).to_string(), "G");
        assert_eq!(Column(26).offset(1).to_string(), "AA");
    }

    #[test]
    fn test_column_debug() {
        assert_eq!(format!("{:?}", Column(28)), "Column(u32: 28, letters: AB)");
    }
}
