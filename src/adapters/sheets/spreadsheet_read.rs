use error_stack::ResultExt;
use tracing::instrument;

use super::{
    cell_values::IntoGrid,
    spreadsheet_manager::{SpreadsheetManager, SpreadsheetManagerError},
};
use crate::domain::sheets::{a1_notation::A1Notation, Grid};

pub trait SpreadsheetRead {
    fn read_range(
        &self,
        range: &A1Notation,
    ) -> impl std::future::Future<Output = error_stack::Result<Grid, SpreadsheetManagerError>> + Send;
}

impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_range(&self, range: &A1Notation) -> error_stack::Result<Grid, SpreadsheetManagerError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range.as_ref())
            .major_dimension("ROWS")
            .value_render_option("FORMATTED_VALUE")
            .doit()
            .await
            .change_context(SpreadsheetManagerError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        // An entirely blank range comes back without `values`.
        let grid = response.1.values.unwrap_or_default().into_grid();
        tracing::debug!(rows = grid.len(), "read range");

        Ok(grid)
    }
}
