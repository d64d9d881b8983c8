//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod court;
pub mod reservation;
pub mod user;
pub mod worker;

pub use court::*;
pub use reservation::*;
pub use user::*;
pub use worker::*;
