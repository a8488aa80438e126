use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use tracing::instrument;

use super::{http_client::HttpsConnector, spreadsheet_manager::SpreadsheetManagerError};
use crate::adapters::config::sheets_config::{Credentials, SpreadsheetConfig};

const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[instrument(skip(client))]
pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SpreadsheetManagerError> {
    let secret = match config
        .credentials()
        .change_context(SpreadsheetManagerError::Authentication)?
    {
        Credentials::KeyFile(path) => oauth2::read_service_account_key(&path)
            .await
            .change_context(SpreadsheetManagerError::Authentication)
            .attach_printable_lazy(|| {
                format!("could not read service account private key at '{}'", path)
            })?,
        Credentials::Inline {
            client_email,
            private_key,
        } => service_account_key(&client_email, &private_key)
            .change_context(SpreadsheetManagerError::Authentication)
            .attach_printable_lazy(|| {
                format!("invalid inline service account for '{}'", client_email)
            })?,
    };

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::Authentication)
        .attach_printable("could not create an authenticator")
}

/// Builds a key from the two fields the deployment provides; the token endpoint is Google's.
fn service_account_key(
    client_email: &str,
    private_key: &str,
) -> Result<oauth2::ServiceAccountKey, serde_json::Error> {
    serde_json::from_value(serde_json::json!({
        "type": "service_account",
        "client_email": client_email,
        "private_key": private_key,
        "token_uri": GOOGLE_TOKEN_URI,
    }))
}
