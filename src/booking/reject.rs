//! Rejection taxonomy for booking and cancellation

/// Why a booking or cancellation was refused.
///
/// Rejections are terminal for the request: they are never retried and
/// the message is surfaced verbatim to the caller for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Play date is in the past")]
    PastDate,

    #[error("Times must fall on the half hour")]
    InvalidGranularity,

    #[error("Courts are open 07:00 to 20:00")]
    OutsideHours,

    #[error("Start time has already passed")]
    PastStartTime,

    #[error("End time must be after start time")]
    EndBeforeStart,

    #[error("Bookings are limited to 60 minutes")]
    DurationExceeded,

    #[error("No such court at this facility")]
    CourtNotFound,

    #[error("You already have a booking in this slot")]
    SlotConflictSelf,

    #[error("This slot is already taken")]
    SlotConflictOther,

    #[error("No reservation found for the given details")]
    ReservationNotFound,

    #[error("The reservation has already started or passed")]
    AlreadyPast,

    #[error("Players must be at least 16 years old")]
    UnderMinimumAge,
}

impl RejectReason {
    /// Stable machine-readable code for this rejection
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::PastDate => "PAST_DATE",
            Self::InvalidGranularity => "INVALID_GRANULARITY",
            Self::OutsideHours => "OUTSIDE_HOURS",
            Self::PastStartTime => "PAST_START_TIME",
            Self::EndBeforeStart => "END_BEFORE_START",
            Self::DurationExceeded => "DURATION_EXCEEDED",
            Self::CourtNotFound => "COURT_NOT_FOUND",
            Self::SlotConflictSelf => "SLOT_CONFLICT_SELF",
            Self::SlotConflictOther => "SLOT_CONFLICT_OTHER",
            Self::ReservationNotFound => "RESERVATION_NOT_FOUND",
            Self::AlreadyPast => "ALREADY_PAST",
            Self::UnderMinimumAge => "UNDER_MINIMUM_AGE",
        }
    }
}
