//! Booking handler implementations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use validator::Validate;

use crate::{
    error::AppResult,
    services::BookingService,
    state::AppState,
};

use super::{
    request::{BookedSlotsQuery, CancelBookingRequest, CreateBookingRequest},
    response::{BookedSlotsResponse, BookingConfirmation, CancellationConfirmation},
};

/// Book a slot
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingConfirmation>)> {
    payload.validate()?;

    // The clock is read once here; everything below is deterministic
    let now = Local::now().naive_local();

    let confirmation = BookingService::book(state.db(), payload, now).await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// Cancel a reservation
pub async fn cancel_booking(
    State(state): State<AppState>,
    Json(payload): Json<CancelBookingRequest>,
) -> AppResult<Json<CancellationConfirmation>> {
    payload.validate()?;

    let now = Local::now().naive_local();

    let confirmation = BookingService::cancel(state.db(), payload, now).await?;

    Ok(Json(confirmation))
}

/// List the taken intervals for one court and date
pub async fn list_booked_slots(
    State(state): State<AppState>,
    Query(query): Query<BookedSlotsQuery>,
) -> AppResult<Json<BookedSlotsResponse>> {
    let slots = BookingService::booked_slots(
        state.db(),
        &query.facility,
        query.court_number,
        &query.date,
    )
    .await?;

    Ok(Json(BookedSlotsResponse {
        facility: query.facility,
        court_number: query.court_number,
        date: query.date,
        slots,
    }))
}
