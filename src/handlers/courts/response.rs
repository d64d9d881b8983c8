//! Court response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Court, FacilityCount};

/// Court response
#[derive(Debug, Serialize)]
pub struct CourtResponse {
    pub id: Uuid,
    pub facility: String,
    pub court_number: i32,
    pub surface: String,
    pub maintenance_date: Option<NaiveDate>,
    pub maintenance_worker_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Court> for CourtResponse {
    fn from(court: Court) -> Self {
        Self {
            id: court.id,
            facility: court.facility,
            court_number: court.court_number,
            surface: court.surface,
            maintenance_date: court.maintenance_date,
            maintenance_worker_id: court.maintenance_worker_id,
            created_at: court.created_at,
            updated_at: court.updated_at,
        }
    }
}

/// Court list response
#[derive(Debug, Serialize)]
pub struct CourtsListResponse {
    pub courts: Vec<CourtResponse>,
}

/// Facility list response
///
/// `warning` is set when the list could not be read and degraded to
/// empty rather than failing the page.
#[derive(Debug, Serialize)]
pub struct FacilitiesResponse {
    pub facilities: Vec<FacilityCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
