//! Court management handlers

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

/// Public court routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::list_courts))
}

/// Admin court routes (auth applied by the parent router)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_court))
        .route("/{id}", put(handler::update_court))
        .route("/{id}", delete(handler::delete_court))
        .route("/{id}/maintenance", put(handler::set_maintenance))
}
