use std::sync::Arc;

use error_stack::ResultExt;
use google_sheets4::api::ValueRange;

use super::{
    spreadsheet_manager::SpreadsheetManager, spreadsheet_read::SpreadsheetRead,
    spreadsheet_write::SpreadsheetWrite, value_range_factory::ValueRangeFactory,
};
use crate::domain::{
    guests::AttendanceUpdate,
    sheets::{
        a1_notation::ToA1Notation, cell_position::CellPosition, cell_range::CellRange, row::Row,
        Grid,
    },
};
use crate::ports::guest_repository::{GuestRepository, GuestRepositoryError};

/// Guest rows living in one fixed window of a sheet, e.g. `'Gasten'!A1:J101`.
pub struct SheetGuestRepository {
    pub spreadsheet_manager: Arc<SpreadsheetManager>,
    range: CellRange,
}

impl SheetGuestRepository {
    pub fn new(spreadsheet_manager: Arc<SpreadsheetManager>, range: &CellRange) -> Self {
        Self {
            spreadsheet_manager,
            range: range.clone(),
        }
    }
}

/// One single-row range per update, offset from the window's top-left cell.
fn attendance_value_ranges(window: &CellRange, updates: &[AttendanceUpdate]) -> Vec<ValueRange> {
    updates
        .iter()
        .map(|update| {
            let row = Row::from_index(window.start.row.index() + update.row as u32);
            let first = update.column as u32;
            let last = first + (update.cells.len() as u32).saturating_sub(1);
            let cells = CellRange {
                start: CellPosition {
                    col: window.start.col.offset(first),
                    row,
                },
                end: CellPosition {
                    col: window.start.col.offset(last),
                    row,
                },
                sheet_title: window.sheet_title.clone(),
            };

            ValueRange::from_rows(&cells.to_a1_notation(None), &[update.cells.clone()])
        })
        .collect()
}

#[async_trait::async_trait]
impl GuestRepository for SheetGuestRepository {
    async fn read_grid(&self) -> error_stack::Result<Grid, GuestRepositoryError> {
        self.spreadsheet_manager
            .read_range(&self.range.to_a1_notation(None))
            .await
            .change_context(GuestRepositoryError::ReadRowsError)
    }

    async fn write_attendance(
        &self,
        updates: &[AttendanceUpdate],
    ) -> error_stack::Result<(), GuestRepositoryError> {
        self.spreadsheet_manager
            .write_ranges(attendance_value_ranges(&self.range, updates))
            .await
            .change_context(GuestRepositoryError::WriteRowsError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(row: usize) -> AttendanceUpdate {
        AttendanceUpdate {
            row,
            column: 6,
            cells: vec!["✓".to_owned(), "✗".to_owned(), "✓".to_owned(), "✗".to_owned()],
        }
    }

    #[test]
    fn test_only_attendance_cells_of_updated_rows_are_sent() {
        let window = "A1:J101"
            .parse::<CellRange>()
            .unwrap()
            .with_sheet_title("Gasten");

        let value_ranges = attendance_value_ranges(&window, &[update(2), update(5)]);

        let ranges: Vec<_> = value_ranges
            .iter()
            .map(|value_range| value_range.range.clone().unwrap())
            .collect();
        assert_eq!(ranges, vec!["'Gasten'!G3:J3", "'Gasten'!G6:J6"]);
        assert_eq!(
            value_ranges[0].values,
            Some(vec![vec![json!("✓"), json!("✗"), json!("✓"), json!("✗")]])
        );
    }

    #[test]
    fn test_ranges_follow_window_offset() {
        let window = "B5:K40".parse::<CellRange>().unwrap();

        let value_ranges = attendance_value_ranges(&window, &[update(1)]);

        assert_eq!(value_ranges.len(), 1);
        assert_eq!(value_ranges[0].range.as_deref(), Some("H6:K6"));
    }

    #[test]
    fn test_no_updates_send_no_ranges() {
        let window = "A1:J101".parse::<CellRange>().unwrap();
        assert!(attendance_value_ranges(&window, &[]).is_empty());
    }
}
