//! Booking request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_FACILITY_NAME_LENGTH, MAX_PERSON_NAME_LENGTH};

/// Create booking request
///
/// All slot fields are optional at the wire level so that absence is
/// reported as a proper rejection instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(max = MAX_FACILITY_NAME_LENGTH))]
    pub facility: Option<String>,

    pub court_number: Option<i32>,

    /// Play date, `YYYY-MM-DD`
    pub date: Option<String>,

    /// Start time, `HH:MM`
    pub start: Option<String>,

    /// End time, `HH:MM`
    pub end: Option<String>,

    #[validate(nested)]
    pub user: PlayerDetails,
}

/// The acting player
#[derive(Debug, Deserialize, Validate)]
pub struct PlayerDetails {
    /// Known player id; when absent the player is looked up by email
    /// and created on first booking
    pub id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: Option<String>,

    /// Required for players not yet on file, `YYYY-MM-DD`
    pub birth_date: Option<String>,
}

/// Cancel booking request
///
/// A reservation is located either by (reservation_id + email) or by
/// (first/last name + email + facility + court number + date + start).
#[derive(Debug, Deserialize, Validate)]
pub struct CancelBookingRequest {
    pub reservation_id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: Option<String>,

    #[validate(length(max = MAX_FACILITY_NAME_LENGTH))]
    pub facility: Option<String>,

    pub court_number: Option<i32>,

    /// Play date, `YYYY-MM-DD`
    pub date: Option<String>,

    /// Start time, `HH:MM`
    pub start: Option<String>,
}

/// Query parameters for the booked-slots listing
#[derive(Debug, Deserialize)]
pub struct BookedSlotsQuery {
    pub facility: String,
    pub court_number: i32,
    /// Play date, `YYYY-MM-DD`
    pub date: String,
}
