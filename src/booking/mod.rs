//! Booking validation core
//!
//! Pure decision logic for reservations: given a candidate slot, the
//! existing reservations on the same court and date, and the current
//! local date-time, decide acceptance or produce a [`RejectReason`].
//! No I/O happens here; the clock is always passed in by the caller.

pub mod reject;
pub mod slot;
pub mod validate;

pub use reject::RejectReason;
pub use slot::Slot;
pub use validate::{check_age, check_conflicts, validate_cancellation, validate_slot, BookedSlot};
