//! Court service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{CourtRepository, WorkerRepository},
    error::{AppError, AppResult},
    handlers::courts::request::{CreateCourtRequest, SetMaintenanceRequest, UpdateCourtRequest},
    models::{Court, FacilityCount},
    utils::{time, validation},
};

/// Court service for facility administration
pub struct CourtService;

impl CourtService {
    /// List courts, optionally restricted to one facility
    pub async fn list_courts(pool: &PgPool, facility: Option<&str>) -> AppResult<Vec<Court>> {
        CourtRepository::list(pool, facility).await
    }

    /// Distinct facilities with court counts, for the booking form.
    ///
    /// A failed read degrades to an empty list with a warning instead of
    /// an error page; this is the only place a storage failure is not
    /// surfaced as such.
    pub async fn facilities(pool: &PgPool) -> (Vec<FacilityCount>, Option<String>) {
        match CourtRepository::facility_counts(pool).await {
            Ok(facilities) => (facilities, None),
            Err(e) => {
                tracing::warn!("Facility list unavailable: {}", e);
                (
                    Vec::new(),
                    Some("Facility list is temporarily unavailable".to_string()),
                )
            }
        }
    }

    /// Create a new court
    pub async fn create_court(pool: &PgPool, payload: CreateCourtRequest) -> AppResult<Court> {
        let facility = validation::sanitize_string(&payload.facility);
        if facility.is_empty() {
            return Err(AppError::Validation("Facility name cannot be empty".to_string()));
        }
        validation::validate_court_number(payload.court_number)
            .and_then(|_| validation::validate_surface(&payload.surface))
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if CourtRepository::find_by_facility_and_number(pool, &facility, payload.court_number)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Court {} already exists at {}",
                payload.court_number, facility
            )));
        }

        CourtRepository::create(pool, &facility, payload.court_number, &payload.surface).await
    }

    /// Update a court's facility, number, or surface
    pub async fn update_court(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateCourtRequest,
    ) -> AppResult<Court> {
        if let Some(number) = payload.court_number {
            validation::validate_court_number(number)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(surface) = payload.surface.as_deref() {
            validation::validate_surface(surface)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        let facility = payload.facility.as_deref().map(validation::sanitize_string);
        if facility.as_deref() == Some("") {
            return Err(AppError::Validation("Facility name cannot be empty".to_string()));
        }

        if CourtRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Court not found".to_string()));
        }

        CourtRepository::update(
            pool,
            id,
            facility.as_deref(),
            payload.court_number,
            payload.surface.as_deref(),
        )
        .await
    }

    /// Schedule or clear maintenance for a court
    pub async fn set_maintenance(
        pool: &PgPool,
        id: &Uuid,
        payload: SetMaintenanceRequest,
    ) -> AppResult<Court> {
        if CourtRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Court not found".to_string()));
        }

        let maintenance_date = match payload.maintenance_date.as_deref() {
            Some(raw) => Some(
                time::parse_date(raw)
                    .ok_or_else(|| AppError::Validation("maintenance_date must be YYYY-MM-DD".to_string()))?,
            ),
            None => None,
        };

        if let Some(worker_id) = payload.maintenance_worker_id {
            if WorkerRepository::find_by_id(pool, &worker_id).await?.is_none() {
                return Err(AppError::NotFound("Maintenance worker not found".to_string()));
            }
        }

        CourtRepository::set_maintenance(pool, id, maintenance_date, payload.maintenance_worker_id)
            .await
    }

    /// Delete a court (its reservations go with it)
    pub async fn delete_court(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let removed = CourtRepository::delete(pool, id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Court not found".to_string()));
        }
        Ok(())
    }
}
