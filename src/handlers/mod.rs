//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod bookings;
pub mod courts;
pub mod health;
pub mod hooks;
pub mod workers;

use axum::{middleware, routing::get, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/bookings", bookings::routes())
        .nest("/courts", courts::routes())
        .nest(
            "/admin/courts",
            courts::admin_routes().route_layer(middleware::from_fn(auth_middleware)),
        )
        .nest(
            "/admin/workers",
            workers::routes().route_layer(middleware::from_fn(auth_middleware)),
        )
        .route("/facilities", get(courts::list_facilities))
}
