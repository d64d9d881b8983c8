//! Maintenance worker repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::MaintenanceWorker};

/// Repository for maintenance worker database operations
pub struct WorkerRepository;

impl WorkerRepository {
    /// Create a new worker
    pub async fn create(
        pool: &PgPool,
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
    ) -> AppResult<MaintenanceWorker> {
        let worker = sqlx::query_as::<_, MaintenanceWorker>(
            r#"
            INSERT INTO maintenance_workers (first_name, last_name, birth_date)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(birth_date)
        .fetch_one(pool)
        .await?;

        Ok(worker)
    }

    /// Find worker by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<MaintenanceWorker>> {
        let worker =
            sqlx::query_as::<_, MaintenanceWorker>(r#"SELECT * FROM maintenance_workers WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(worker)
    }

    /// List all workers
    pub async fn list(pool: &PgPool) -> AppResult<Vec<MaintenanceWorker>> {
        let workers = sqlx::query_as::<_, MaintenanceWorker>(
            r#"SELECT * FROM maintenance_workers ORDER BY last_name, first_name"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(workers)
    }

    /// Update a worker
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        birth_date: Option<NaiveDate>,
    ) -> AppResult<MaintenanceWorker> {
        let worker = sqlx::query_as::<_, MaintenanceWorker>(
            r#"
            UPDATE maintenance_workers
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(birth_date)
        .fetch_one(pool)
        .await?;

        Ok(worker)
    }

    /// Delete a worker. Courts referencing it fall back to no assigned
    /// worker via the foreign key's ON DELETE SET NULL.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM maintenance_workers WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
