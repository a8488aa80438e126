pub mod a1_notation;
pub mod cell_position;
pub mod cell_range;
pub mod column;
pub mod row;

/// Cell values of a range, row-major, as rendered by the spreadsheet.
/// Rows may be shorter than the range width: trailing blank cells are omitted.
pub type Grid = Vec<Vec<String>>;
