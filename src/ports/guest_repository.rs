use thiserror::Error;

use crate::domain::{guests::AttendanceUpdate, sheets::Grid};

#[derive(Error, Debug)]
pub enum GuestRepositoryError {
    #[error("Failed to read guest rows from repository")]
    ReadRowsError,
    #[error("Failed to write guest rows to repository")]
    WriteRowsError,
}

#[async_trait::async_trait]
pub trait GuestRepository: Send + Sync {
    /// Reads the whole guest window as displayed, header row first.
    async fn read_grid(&self) -> error_stack::Result<Grid, GuestRepositoryError>;

    /// Writes only the cells named by `updates`, positioned relative to the
    /// window read by [`GuestRepository::read_grid`].
    async fn write_attendance(
        &self,
        updates: &[AttendanceUpdate],
    ) -> error_stack::Result<(), GuestRepositoryError>;
}
