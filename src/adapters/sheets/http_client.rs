use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use super::spreadsheet_manager::SpreadsheetManagerError;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

pub fn http_client() -> error_stack::Result<hyper::Client<HttpsConnector>, SpreadsheetManagerError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SpreadsheetManagerError::HttpClient)
        .attach_printable("could not load the native root certificates")?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_certificates_are_reported() {
        // Hosts without a certificate store yield an error report instead of a panic.
        if let Err(report) = http_client() {
            assert!(matches!(
                report.current_context(),
                SpreadsheetManagerError::HttpClient
            ));
        }
    }
}
