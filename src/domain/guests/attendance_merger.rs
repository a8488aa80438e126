use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::{activity::Activity, attendance::Attendance, schema::GuestSchema};
use crate::domain::sheets::Grid;

/// New attendance cells for one row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceUpdate {
    /// 0-based grid row, header included.
    pub row: usize,
    /// 0-based grid column of the first attendance cell.
    pub column: usize,
    pub cells: Vec<String>,
}

impl AttendanceUpdate {
    /// Overwrites the attendance cells of the targeted row, padding it with
    /// blanks when it is shorter than the attendance columns.
    pub fn apply(&self, grid: &mut Grid) {
        let Some(row) = grid.get_mut(self.row) else {
            return;
        };
        let end = self.column + self.cells.len();
        if row.len() < end {
            row.resize(end, String::new());
        }
        row[self.column..end].clone_from_slice(&self.cells);
    }
}

/// One update per data row whose first cell parses to a submitted guest id,
/// in grid order. When several decisions name the same guest, the last one wins.
pub fn attendance_updates(
    grid: &Grid,
    schema: &GuestSchema,
    attendances: &[Attendance],
) -> Vec<AttendanceUpdate> {
    let by_guest: HashMap<i64, &Attendance> = attendances
        .iter()
        .map(|attendance| (attendance.guest_id(), attendance))
        .collect();

    grid.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| {
            let id = row.first()?.trim().parse::<i64>().ok()?;
            let attendance = by_guest.get(&id)?;
            Some(AttendanceUpdate {
                row: index,
                column: schema.attendance_start(),
                cells: Activity::iter()
                    .map(|activity| attendance.decision(activity).sentinel().to_owned())
                    .collect(),
            })
        })
        .collect()
}

/// Writes each guest's decisions into the trailing attendance columns of the
/// rows whose first cell parses to that guest's id.
///
/// The header and every row without a matching decision come back unchanged.
pub fn merge_attendance(grid: &Grid, schema: &GuestSchema, attendances: &[Attendance]) -> Grid {
    let mut merged = grid.clone();
    for update in attendance_updates(grid, schema, attendances) {
        update.apply(&mut merged);
    }
    merged
}
