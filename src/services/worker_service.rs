//! Maintenance worker service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::WorkerRepository,
    error::{AppError, AppResult},
    handlers::workers::request::{CreateWorkerRequest, UpdateWorkerRequest},
    models::MaintenanceWorker,
    utils::{time, validation},
};

/// Service for maintenance staff administration
pub struct WorkerService;

impl WorkerService {
    /// List all workers
    pub async fn list_workers(pool: &PgPool) -> AppResult<Vec<MaintenanceWorker>> {
        WorkerRepository::list(pool).await
    }

    /// Create a new worker
    pub async fn create_worker(
        pool: &PgPool,
        payload: CreateWorkerRequest,
    ) -> AppResult<MaintenanceWorker> {
        validation::validate_person_name(&payload.first_name)
            .and_then(|_| validation::validate_person_name(&payload.last_name))
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let birth_date = time::parse_date(&payload.birth_date)
            .ok_or_else(|| AppError::Validation("birth_date must be YYYY-MM-DD".to_string()))?;

        WorkerRepository::create(pool, &payload.first_name, &payload.last_name, birth_date).await
    }

    /// Update a worker
    pub async fn update_worker(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateWorkerRequest,
    ) -> AppResult<MaintenanceWorker> {
        if let Some(name) = payload.first_name.as_deref() {
            validation::validate_person_name(name)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(name) = payload.last_name.as_deref() {
            validation::validate_person_name(name)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        let birth_date = match payload.birth_date.as_deref() {
            Some(raw) => Some(
                time::parse_date(raw)
                    .ok_or_else(|| AppError::Validation("birth_date must be YYYY-MM-DD".to_string()))?,
            ),
            None => None,
        };

        if WorkerRepository::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::NotFound("Maintenance worker not found".to_string()));
        }

        WorkerRepository::update(
            pool,
            id,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
            birth_date,
        )
        .await
    }

    /// Delete a worker; any court assignment is nulled, never cascaded
    pub async fn delete_worker(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let removed = WorkerRepository::delete(pool, id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Maintenance worker not found".to_string()));
        }
        Ok(())
    }
}
