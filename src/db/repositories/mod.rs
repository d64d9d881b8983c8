//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod court_repo;
pub mod reservation_repo;
pub mod user_repo;
pub mod worker_repo;

pub use court_repo::CourtRepository;
pub use reservation_repo::ReservationRepository;
pub use user_repo::UserRepository;
pub use worker_repo::WorkerRepository;
