use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/fetch", get(handlers::fetch_handler))
        .route("/submit", post(handlers::submit_handler))
        .route("/health", get(handlers::health_handler))
        // The RSVP front-end is served from its own origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
