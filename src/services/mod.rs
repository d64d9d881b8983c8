//! Business logic services

pub mod auth_service;
pub mod booking_service;
pub mod court_service;
pub mod worker_service;

pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use court_service::CourtService;
pub use worker_service::WorkerService;
