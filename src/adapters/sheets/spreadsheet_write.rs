use error_stack::ResultExt;
use google_sheets4::api::{BatchUpdateValuesRequest, ValueRange};
use tracing::instrument;

use super::spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError};

pub trait SpreadsheetWrite {
    /// Writes every range in one request. Each `ValueRange` carries its own A1 range.
    fn write_ranges(
        &self,
        value_ranges: Vec<ValueRange>,
    ) -> impl std::future::Future<Output = error_stack::Result<(), SpreadsheetManagerError>> + Send;
}

impl SpreadsheetWrite for SpreadsheetManager {
    #[instrument(skip(value_ranges), fields(ranges = value_ranges.len()))]
    async fn write_ranges(
        &self,
        value_ranges: Vec<ValueRange>,
    ) -> error_stack::Result<(), SpreadsheetManagerError> {
        let ranges = value_ranges
            .iter()
            .filter_map(|value_range| value_range.range.as_deref())
            .collect::<Vec<_>>()
            .join(", ");

        // RAW: cells are stored exactly as given, never parsed as typed input.
        let request = BatchUpdateValuesRequest {
            data: Some(value_ranges),
            value_input_option: Some("RAW".to_string()),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .values_batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetManagerError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write ranges {}", ranges))
    }
}
