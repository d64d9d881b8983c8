//! Court request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_FACILITY_NAME_LENGTH;

/// Create court request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourtRequest {
    #[validate(length(min = 1, max = MAX_FACILITY_NAME_LENGTH))]
    pub facility: String,

    pub court_number: i32,

    /// Surface type: clay, grass, hard, carpet
    pub surface: String,
}

/// Update court request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourtRequest {
    #[validate(length(min = 1, max = MAX_FACILITY_NAME_LENGTH))]
    pub facility: Option<String>,

    pub court_number: Option<i32>,

    pub surface: Option<String>,
}

/// Maintenance schedule request; omitted fields clear the schedule
#[derive(Debug, Deserialize, Validate)]
pub struct SetMaintenanceRequest {
    /// Maintenance date, `YYYY-MM-DD`
    pub maintenance_date: Option<String>,

    pub maintenance_worker_id: Option<Uuid>,
}

/// List courts query parameters
#[derive(Debug, Deserialize)]
pub struct ListCourtsQuery {
    pub facility: Option<String>,
}
