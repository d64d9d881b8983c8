//! Maintenance worker handlers (admin only; auth applied by the parent router)

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Worker routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_workers))
        .route("/", post(handler::create_worker))
        .route("/{id}", put(handler::update_worker))
        .route("/{id}", delete(handler::delete_worker))
}
