//! Maintenance worker request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_PERSON_NAME_LENGTH;

/// Create worker request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkerRequest {
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: String,

    /// Birth date, `YYYY-MM-DD`
    pub birth_date: String,
}

/// Update worker request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkerRequest {
    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_PERSON_NAME_LENGTH))]
    pub last_name: Option<String>,

    /// Birth date, `YYYY-MM-DD`
    pub birth_date: Option<String>,
}
