use std::sync::Arc;

use error_stack::{report, ResultExt};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::domain::guests::{attendance_updates, map_guests, Attendance, Guest, GuestSchema};
use crate::ports::guest_repository::GuestRepository;

#[derive(Error, Debug)]
pub enum GuestServiceError {
    #[error("Failed to read the guest sheet")]
    ReadFailed,
    #[error("The guest sheet is malformed")]
    MalformedSheet,
    #[error("Failed to write the guest sheet")]
    WriteFailed,
}

pub struct GuestService {
    repository: Arc<dyn GuestRepository>,
    schema: GuestSchema,
    // Held across read and write so submissions to this process never interleave.
    submissions: Mutex<()>,
}

impl GuestService {
    pub fn new(repository: Arc<dyn GuestRepository>, schema: GuestSchema) -> Self {
        Self {
            repository,
            schema,
            submissions: Mutex::new(()),
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_guests(&self) -> error_stack::Result<Vec<Guest>, GuestServiceError> {
        let grid = self
            .repository
            .read_grid()
            .await
            .change_context(GuestServiceError::ReadFailed)?;

        let guests = map_guests(&grid, &self.schema).change_context(GuestServiceError::MalformedSheet)?;

        info!(guests = guests.len(), "Fetched guests");
        Ok(guests)
    }

    #[instrument(skip(self, attendances), fields(decisions = attendances.len()))]
    pub async fn submit_attendance(
        &self,
        attendances: &[Attendance],
    ) -> error_stack::Result<(), GuestServiceError> {
        if attendances.is_empty() {
            info!("Empty submission, nothing to write");
            return Ok(());
        }

        let _guard = self.submissions.lock().await;

        let grid = self
            .repository
            .read_grid()
            .await
            .change_context(GuestServiceError::ReadFailed)?;

        let header = grid
            .first()
            .ok_or_else(|| report!(GuestServiceError::MalformedSheet))
            .attach_printable("Sheet has no header row")?;
        self.schema
            .validate_header(header)
            .change_context(GuestServiceError::MalformedSheet)?;

        let updates = attendance_updates(&grid, &self.schema, attendances);
        if updates.is_empty() {
            info!("No submitted guest is listed in the sheet, nothing to write");
            return Ok(());
        }

        self.repository
            .write_attendance(&updates)
            .await
            .change_context(GuestServiceError::WriteFailed)?;

        info!(
            guests = ?attendances.iter().map(Attendance::guest_id).collect::<Vec<_>>(),
            rows = updates.len(),
            "Attendance saved"
        );
        Ok(())
    }
}
