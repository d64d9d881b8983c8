//! Courtbook - Court Booking Service
//!
//! This library provides the core functionality for the Courtbook
//! platform: slot reservations on facility courts with full conflict
//! validation, plus the administration of courts and maintenance staff.
//!
//! # Features
//!
//! - Half-hour slot bookings within opening hours, capped at one hour
//! - Conflict detection with race-free persistence (court row locks)
//! - Guest profiles created on first booking, claimable at registration
//! - Court and maintenance-staff administration
//! - Push-to-deploy webhook with HMAC verification
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Booking core**: Pure validation rules, no I/O
//! - **Models**: Domain models and DTOs

pub mod booking;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
