//! Court repository

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Court, FacilityCount},
};

/// Repository for court database operations
pub struct CourtRepository;

impl CourtRepository {
    /// Create a new court
    pub async fn create(
        pool: &PgPool,
        facility: &str,
        court_number: i32,
        surface: &str,
    ) -> AppResult<Court> {
        let court = sqlx::query_as::<_, Court>(
            r#"
            INSERT INTO courts (facility, court_number, surface)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(facility)
        .bind(court_number)
        .bind(surface)
        .fetch_one(pool)
        .await?;

        Ok(court)
    }

    /// Find court by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Court>> {
        let court = sqlx::query_as::<_, Court>(r#"SELECT * FROM courts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(court)
    }

    /// Find court by facility name and court number
    pub async fn find_by_facility_and_number(
        pool: &PgPool,
        facility: &str,
        court_number: i32,
    ) -> AppResult<Option<Court>> {
        let court = sqlx::query_as::<_, Court>(
            r#"SELECT * FROM courts WHERE facility = $1 AND court_number = $2"#,
        )
        .bind(facility)
        .bind(court_number)
        .fetch_optional(pool)
        .await?;

        Ok(court)
    }

    /// Find a court and take a row lock on it for the duration of the
    /// surrounding transaction. Serializes bookings per court so the
    /// overlap re-check and insert cannot race.
    pub async fn find_and_lock(
        tx: &mut Transaction<'_, Postgres>,
        facility: &str,
        court_number: i32,
    ) -> AppResult<Option<Court>> {
        let court = sqlx::query_as::<_, Court>(
            r#"SELECT * FROM courts WHERE facility = $1 AND court_number = $2 FOR UPDATE"#,
        )
        .bind(facility)
        .bind(court_number)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(court)
    }

    /// List courts, optionally restricted to one facility
    pub async fn list(pool: &PgPool, facility: Option<&str>) -> AppResult<Vec<Court>> {
        let courts = sqlx::query_as::<_, Court>(
            r#"
            SELECT * FROM courts
            WHERE ($1::text IS NULL OR facility = $1)
            ORDER BY facility, court_number
            "#,
        )
        .bind(facility)
        .fetch_all(pool)
        .await?;

        Ok(courts)
    }

    /// Distinct facilities with their court counts
    pub async fn facility_counts(pool: &PgPool) -> AppResult<Vec<FacilityCount>> {
        let facilities = sqlx::query_as::<_, FacilityCount>(
            r#"
            SELECT facility, COUNT(*) AS court_count
            FROM courts
            GROUP BY facility
            ORDER BY facility
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(facilities)
    }

    /// Update a court's facility, number, or surface
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        facility: Option<&str>,
        court_number: Option<i32>,
        surface: Option<&str>,
    ) -> AppResult<Court> {
        let court = sqlx::query_as::<_, Court>(
            r#"
            UPDATE courts
            SET
                facility = COALESCE($2, facility),
                court_number = COALESCE($3, court_number),
                surface = COALESCE($4, surface),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(facility)
        .bind(court_number)
        .bind(surface)
        .fetch_one(pool)
        .await?;

        Ok(court)
    }

    /// Set or clear the maintenance schedule and assigned worker
    pub async fn set_maintenance(
        pool: &PgPool,
        id: &Uuid,
        maintenance_date: Option<NaiveDate>,
        maintenance_worker_id: Option<Uuid>,
    ) -> AppResult<Court> {
        let court = sqlx::query_as::<_, Court>(
            r#"
            UPDATE courts
            SET maintenance_date = $2, maintenance_worker_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(maintenance_date)
        .bind(maintenance_worker_id)
        .fetch_one(pool)
        .await?;

        Ok(court)
    }

    /// Delete a court. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM courts WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
