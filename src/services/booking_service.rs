//! Booking service
//!
//! Orchestrates the validation core against storage. The rule order
//! follows the booking contract exactly: field presence, slot rules,
//! court existence, conflicts, age. First failure wins, and the whole
//! validate-and-write runs in one transaction under a court row lock
//! so concurrent bookings for the same slot cannot both commit.

use chrono::NaiveDateTime;
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    booking::{self, BookedSlot, RejectReason, Slot},
    constants::roles,
    db::repositories::{CourtRepository, ReservationRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::bookings::request::{CancelBookingRequest, CreateBookingRequest, PlayerDetails},
    handlers::bookings::response::{
        BookedSlotResponse, BookingConfirmation, CancellationConfirmation,
    },
    models::User,
    utils::{crypto, time, validation},
};

/// Booking service for slot reservation and cancellation
pub struct BookingService;

impl BookingService {
    /// Validate a booking candidate and persist it.
    ///
    /// `now` is the current local date-time, read once at the handler
    /// boundary; the validation core never consults the clock itself.
    pub async fn book(
        pool: &PgPool,
        payload: CreateBookingRequest,
        now: NaiveDateTime,
    ) -> AppResult<BookingConfirmation> {
        let facility = required(&payload.facility, "facility")?;
        let court_number = payload
            .court_number
            .ok_or(RejectReason::MissingField("court_number"))?;
        let date_raw = required(&payload.date, "date")?;
        let start_raw = required(&payload.start, "start")?;
        let end_raw = required(&payload.end, "end")?;

        let date = time::parse_date(date_raw)
            .ok_or_else(|| AppError::Validation("date must be YYYY-MM-DD".to_string()))?;
        let start = time::parse_time(start_raw)
            .ok_or_else(|| AppError::Validation("start must be HH:MM".to_string()))?;
        let end = time::parse_time(end_raw)
            .ok_or_else(|| AppError::Validation("end must be HH:MM".to_string()))?;

        let slot = Slot::new(date, start, end);
        booking::validate_slot(&slot, now)?;

        let mut tx = pool.begin().await?;

        let court = CourtRepository::find_and_lock(&mut tx, facility, court_number)
            .await?
            .ok_or(RejectReason::CourtNotFound)?;

        let player = Self::resolve_player(pool, &mut tx, &payload.user).await?;

        let existing: Vec<BookedSlot> =
            ReservationRepository::list_for_court_date_tx(&mut tx, &court.id, date)
                .await?
                .iter()
                .map(|r| BookedSlot {
                    start: r.start_time,
                    end: r.end_time,
                    user_id: r.user_id,
                })
                .collect();
        booking::check_conflicts(&slot, player.id, &existing)?;
        booking::check_age(player.birth_date, slot.date)?;

        let code = crypto::confirmation_code();
        let reservation = ReservationRepository::insert(
            &mut tx,
            &player.id,
            &court.id,
            date,
            start,
            end,
            &code,
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            reservation_id = %reservation.id,
            facility = %court.facility,
            court_number = court.court_number,
            play_date = %date,
            "Reservation booked"
        );

        Ok(BookingConfirmation {
            reservation_id: reservation.id,
            confirmation_code: reservation.confirmation_code,
            facility: court.facility,
            court_number: court.court_number,
            play_date: time::format_date(date),
            start_time: time::format_time(start),
            end_time: time::format_time(end),
            booked_for: player.full_name(),
        })
    }

    /// Validate a cancellation key and delete the reservation,
    /// returning a snapshot of its fields for the confirmation display.
    pub async fn cancel(
        pool: &PgPool,
        payload: CancelBookingRequest,
        now: NaiveDateTime,
    ) -> AppResult<CancellationConfirmation> {
        let email = required(&payload.email, "email")?;

        // An unknown email and a missing reservation are indistinguishable
        // to the caller on purpose.
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(RejectReason::ReservationNotFound)?;

        let reservation = match payload.reservation_id {
            Some(id) => ReservationRepository::find_by_id(pool, &id)
                .await?
                .filter(|r| r.user_id == user.id)
                .ok_or(RejectReason::ReservationNotFound)?,
            None => Self::find_by_slot_key(pool, &user, &payload).await?,
        };

        booking::validate_cancellation(reservation.play_date, reservation.start_time, now)?;

        let court = CourtRepository::find_by_id(pool, &reservation.court_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        let removed = ReservationRepository::delete(pool, &reservation.id).await?;
        if removed == 0 {
            // Lost a race with another cancellation for the same key
            return Err(RejectReason::ReservationNotFound.into());
        }

        tracing::info!(
            reservation_id = %reservation.id,
            facility = %court.facility,
            court_number = court.court_number,
            play_date = %reservation.play_date,
            "Reservation cancelled"
        );

        Ok(CancellationConfirmation {
            reservation_id: reservation.id,
            facility: court.facility,
            court_number: court.court_number,
            play_date: time::format_date(reservation.play_date),
            start_time: time::format_time(reservation.start_time),
            end_time: time::format_time(reservation.end_time),
            cancelled_for: user.full_name(),
        })
    }

    /// Booked intervals for one court and date, for the booking form
    pub async fn booked_slots(
        pool: &PgPool,
        facility: &str,
        court_number: i32,
        date_raw: &str,
    ) -> AppResult<Vec<BookedSlotResponse>> {
        let date = time::parse_date(date_raw)
            .ok_or_else(|| AppError::Validation("date must be YYYY-MM-DD".to_string()))?;

        let court = CourtRepository::find_by_facility_and_number(pool, facility, court_number)
            .await?
            .ok_or(RejectReason::CourtNotFound)?;

        let reservations =
            ReservationRepository::list_for_court_date(pool, &court.id, date).await?;

        Ok(reservations
            .into_iter()
            .map(|r| BookedSlotResponse {
                start: time::format_time(r.start_time),
                end: time::format_time(r.end_time),
            })
            .collect())
    }

    /// Locate the acting player: by id, by email, or, for a player not
    /// yet on file, create a guest profile inside the booking
    /// transaction (rolled back with it on any later rule failure).
    async fn resolve_player(
        pool: &PgPool,
        tx: &mut Transaction<'_, Postgres>,
        who: &PlayerDetails,
    ) -> AppResult<User> {
        if let Some(id) = who.id {
            return UserRepository::find_by_id(pool, &id)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()));
        }

        let email = required(&who.email, "user.email")?;
        validation::validate_email(email).map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(user) = UserRepository::find_by_email(pool, email).await? {
            return Ok(user);
        }

        let first_name = required(&who.first_name, "user.first_name")?;
        let last_name = required(&who.last_name, "user.last_name")?;
        let birth_raw = required(&who.birth_date, "user.birth_date")?;

        validation::validate_person_name(first_name)
            .and_then(|_| validation::validate_person_name(last_name))
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let birth_date = time::parse_date(birth_raw)
            .ok_or_else(|| AppError::Validation("birth_date must be YYYY-MM-DD".to_string()))?;

        UserRepository::create_guest(tx, email, first_name, last_name, birth_date, roles::MEMBER)
            .await
    }

    /// Resolve the (name + email + court + date + start) cancellation key
    async fn find_by_slot_key(
        pool: &PgPool,
        user: &User,
        payload: &CancelBookingRequest,
    ) -> AppResult<crate::models::Reservation> {
        let first_name = required(&payload.first_name, "first_name")?;
        let last_name = required(&payload.last_name, "last_name")?;
        if !first_name.eq_ignore_ascii_case(&user.first_name)
            || !last_name.eq_ignore_ascii_case(&user.last_name)
        {
            return Err(RejectReason::ReservationNotFound.into());
        }

        let facility = required(&payload.facility, "facility")?;
        let court_number = payload
            .court_number
            .ok_or(RejectReason::MissingField("court_number"))?;
        let date = time::parse_date(required(&payload.date, "date")?)
            .ok_or_else(|| AppError::Validation("date must be YYYY-MM-DD".to_string()))?;
        let start = time::parse_time(required(&payload.start, "start")?)
            .ok_or_else(|| AppError::Validation("start must be HH:MM".to_string()))?;

        let court = CourtRepository::find_by_facility_and_number(pool, facility, court_number)
            .await?
            .ok_or(RejectReason::ReservationNotFound)?;

        ReservationRepository::find_by_user_slot(pool, &user.id, &court.id, date, start)
            .await?
            .ok_or_else(|| RejectReason::ReservationNotFound.into())
    }
}

/// Presence check for a required request field; blank counts as missing.
fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, RejectReason> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RejectReason::MissingField(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert_eq!(
            required(&None, "facility"),
            Err(RejectReason::MissingField("facility"))
        );
        assert_eq!(
            required(&Some("   ".to_string()), "facility"),
            Err(RejectReason::MissingField("facility"))
        );
        assert_eq!(required(&Some(" North ".to_string()), "facility"), Ok("North"));
    }
}
