//! Court model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Court database model
///
/// Courts are numbered within their facility; (facility, court_number)
/// is unique. The maintenance worker reference is weak: deleting the
/// worker nulls it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Court {
    pub id: Uuid,
    pub facility: String,
    pub court_number: i32,
    pub surface: String,
    pub maintenance_date: Option<NaiveDate>,
    pub maintenance_worker_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Facility name with its court count, for the booking form
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacilityCount {
    pub facility: String,
    pub court_count: i64,
}
