use std::sync::Mutex;

use error_stack::report;

use super::guest_repository::{GuestRepository, GuestRepositoryError};
use crate::domain::{guests::AttendanceUpdate, sheets::Grid};

/// Grid kept in memory; reads and writes can be made to fail.
#[derive(Default)]
pub struct InMemoryGuestRepository {
    pub grid: Mutex<Grid>,
    pub reads: Mutex<usize>,
    pub writes: Mutex<Vec<Vec<AttendanceUpdate>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl InMemoryGuestRepository {
    pub fn with_rows(rows: &[&[&str]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Self {
            grid: Mutex::new(grid),
            ..Default::default()
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn read_grid(&self) -> error_stack::Result<Grid, GuestRepositoryError> {
        *self.reads.lock().unwrap() += 1;
        if self.fail_reads {
            return Err(report!(GuestRepositoryError::ReadRowsError));
        }
        Ok(self.grid())
    }

    async fn write_attendance(
        &self,
        updates: &[AttendanceUpdate],
    ) -> error_stack::Result<(), GuestRepositoryError> {
        if self.fail_writes {
            return Err(report!(GuestRepositoryError::WriteRowsError));
        }
        self.writes.lock().unwrap().push(updates.to_vec());
        let mut grid = self.grid.lock().unwrap();
        for update in updates {
            update.apply(&mut grid);
        }
        Ok(())
    }
}

pub const HEADER: &[&str] = &[
    "id",
    "firstName",
    "lastName",
    "householdId",
    "invitedFor",
    "email",
    "antwerp",
    "ceremony",
    "diner",
    "party",
];
