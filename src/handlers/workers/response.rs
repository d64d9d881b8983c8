//! Maintenance worker response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::MaintenanceWorker;

/// Worker response
#[derive(Debug, Serialize)]
pub struct WorkerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MaintenanceWorker> for WorkerResponse {
    fn from(worker: MaintenanceWorker) -> Self {
        Self {
            id: worker.id,
            first_name: worker.first_name,
            last_name: worker.last_name,
            birth_date: worker.birth_date,
            created_at: worker.created_at,
            updated_at: worker.updated_at,
        }
    }
}

/// Worker list response
#[derive(Debug, Serialize)]
pub struct WorkersListResponse {
    pub workers: Vec<WorkerResponse>,
}
