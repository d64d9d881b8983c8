//! Reservation repository
//!
//! The write path runs inside a transaction held by the caller: the
//! court row is locked first (see `CourtRepository::find_and_lock`),
//! then the overlap re-check and insert happen under that lock.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{error::AppResult, models::Reservation};

/// Repository for reservation database operations
pub struct ReservationRepository;

impl ReservationRepository {
    /// Existing reservations for one court and date, ordered by start time
    pub async fn list_for_court_date(
        pool: &PgPool,
        court_id: &Uuid,
        play_date: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE court_id = $1 AND play_date = $2
            ORDER BY start_time
            "#,
        )
        .bind(court_id)
        .bind(play_date)
        .fetch_all(pool)
        .await?;

        Ok(reservations)
    }

    /// Same listing, read under the booking transaction's court lock
    pub async fn list_for_court_date_tx(
        tx: &mut Transaction<'_, Postgres>,
        court_id: &Uuid,
        play_date: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE court_id = $1 AND play_date = $2
            ORDER BY start_time
            "#,
        )
        .bind(court_id)
        .bind(play_date)
        .fetch_all(&mut **tx)
        .await?;

        Ok(reservations)
    }

    /// Insert a validated reservation within the booking transaction
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &Uuid,
        court_id: &Uuid,
        play_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        confirmation_code: &str,
    ) -> AppResult<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (user_id, court_id, play_date, start_time, end_time, confirmation_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(court_id)
        .bind(play_date)
        .bind(start_time)
        .bind(end_time)
        .bind(confirmation_code)
        .fetch_one(&mut **tx)
        .await?;

        Ok(reservation)
    }

    /// Find reservation by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Reservation>> {
        let reservation =
            sqlx::query_as::<_, Reservation>(r#"SELECT * FROM reservations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(reservation)
    }

    /// Find a reservation by its holder and exact slot start
    pub async fn find_by_user_slot(
        pool: &PgPool,
        user_id: &Uuid,
        court_id: &Uuid,
        play_date: NaiveDate,
        start_time: NaiveTime,
    ) -> AppResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE user_id = $1 AND court_id = $2 AND play_date = $3 AND start_time = $4
            "#,
        )
        .bind(user_id)
        .bind(court_id)
        .bind(play_date)
        .bind(start_time)
        .fetch_optional(pool)
        .await?;

        Ok(reservation)
    }

    /// Delete a reservation. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM reservations WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
