//! Booking response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Echo of a successfully persisted booking
///
/// Returned directly to the caller instead of being stashed in session
/// state; the confirmation page renders from this object alone.
#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub reservation_id: Uuid,
    pub confirmation_code: String,
    pub facility: String,
    pub court_number: i32,
    pub play_date: String,
    pub start_time: String,
    pub end_time: String,
    pub booked_for: String,
}

/// Snapshot of a cancelled reservation for the confirmation display
#[derive(Debug, Serialize)]
pub struct CancellationConfirmation {
    pub reservation_id: Uuid,
    pub facility: String,
    pub court_number: i32,
    pub play_date: String,
    pub start_time: String,
    pub end_time: String,
    pub cancelled_for: String,
}

/// One taken interval on a court
#[derive(Debug, Serialize)]
pub struct BookedSlotResponse {
    pub start: String,
    pub end: String,
}

/// Booked intervals for one court and date
#[derive(Debug, Serialize)]
pub struct BookedSlotsResponse {
    pub facility: String,
    pub court_number: i32,
    pub date: String,
    pub slots: Vec<BookedSlotResponse>,
}
