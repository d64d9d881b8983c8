//! Court handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::CourtService,
    state::AppState,
};

use super::{
    request::{CreateCourtRequest, ListCourtsQuery, SetMaintenanceRequest, UpdateCourtRequest},
    response::{CourtResponse, CourtsListResponse, FacilitiesResponse},
};

/// List courts, optionally filtered by facility
pub async fn list_courts(
    State(state): State<AppState>,
    Query(query): Query<ListCourtsQuery>,
) -> AppResult<Json<CourtsListResponse>> {
    let courts = CourtService::list_courts(state.db(), query.facility.as_deref()).await?;

    Ok(Json(CourtsListResponse {
        courts: courts.into_iter().map(CourtResponse::from).collect(),
    }))
}

/// List facilities with court counts (degrades to empty on read failure)
pub async fn list_facilities(
    State(state): State<AppState>,
) -> AppResult<Json<FacilitiesResponse>> {
    let (facilities, warning) = CourtService::facilities(state.db()).await;

    Ok(Json(FacilitiesResponse { facilities, warning }))
}

/// Create a new court
pub async fn create_court(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourtRequest>,
) -> AppResult<(StatusCode, Json<CourtResponse>)> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let court = CourtService::create_court(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(court.into())))
}

/// Update a court
pub async fn update_court(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourtRequest>,
) -> AppResult<Json<CourtResponse>> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let court = CourtService::update_court(state.db(), &id, payload).await?;

    Ok(Json(court.into()))
}

/// Schedule or clear maintenance for a court
pub async fn set_maintenance(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetMaintenanceRequest>,
) -> AppResult<Json<CourtResponse>> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let court = CourtService::set_maintenance(state.db(), &id, payload).await?;

    Ok(Json(court.into()))
}

/// Delete a court
pub async fn delete_court(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    CourtService::delete_court(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden(
            "Only administrators can manage courts".to_string(),
        ));
    }
    Ok(())
}
