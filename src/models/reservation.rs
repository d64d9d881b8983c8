//! Reservation model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reservation database model
///
/// Invariant (enforced at write time and by the database): no two
/// reservations for the same court and play date have overlapping
/// `[start_time, end_time)` intervals.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub court_id: Uuid,
    pub play_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}
