use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

use super::AppState;
use crate::application::guest_service::GuestServiceError;
use crate::domain::guests::{messages, Attendance};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

/// Read failures answer with an empty body; a malformed sheet is a server error.
pub async fn fetch_handler(State(state): State<AppState>) -> Response {
    match state.guest_service.fetch_guests().await {
        Ok(guests) => (StatusCode::OK, Json(guests)).into_response(),
        Err(report) => match report.current_context() {
            GuestServiceError::MalformedSheet => {
                error!("❌ fetch: {:?}", report);
                (StatusCode::INTERNAL_SERVER_ERROR, "Guest sheet is malformed").into_response()
            }
            _ => {
                error!("❌ fetch: {:?}", report);
                StatusCode::BAD_GATEWAY.into_response()
            }
        },
    }
}

/// Always answers with a user-facing message; only an unreadable body gets a 400.
pub async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Attendance>>, JsonRejection>,
) -> (StatusCode, Json<SubmitResponse>) {
    let Json(attendances) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected submission body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse {
                    message: messages::SUBMIT_FAILURE,
                }),
            );
        }
    };

    let message = match state.guest_service.submit_attendance(&attendances).await {
        Ok(()) => messages::SUBMIT_SUCCESS,
        Err(report) => {
            error!("❌ submit: {:?}", report);
            messages::SUBMIT_FAILURE
        }
    };

    (StatusCode::OK, Json(SubmitResponse { message }))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
