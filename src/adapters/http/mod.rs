pub mod handlers;
pub mod router;

use std::sync::Arc;

use crate::application::guest_service::GuestService;

#[derive(Clone)]
pub struct AppState {
    pub guest_service: Arc<GuestService>,
}
