//! Booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Booking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_booked_slots))
        .route("/", post(handler::create_booking))
        .route("/cancel", post(handler::cancel_booking))
}
