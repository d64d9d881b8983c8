//! Maintenance worker handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::WorkerService,
    state::AppState,
};

use super::{
    request::{CreateWorkerRequest, UpdateWorkerRequest},
    response::{WorkerResponse, WorkersListResponse},
};

/// List all maintenance workers
pub async fn list_workers(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<WorkersListResponse>> {
    require_admin(&auth_user)?;

    let workers = WorkerService::list_workers(state.db()).await?;

    Ok(Json(WorkersListResponse {
        workers: workers.into_iter().map(WorkerResponse::from).collect(),
    }))
}

/// Create a new worker
pub async fn create_worker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateWorkerRequest>,
) -> AppResult<(StatusCode, Json<WorkerResponse>)> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let worker = WorkerService::create_worker(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(worker.into())))
}

/// Update a worker
pub async fn update_worker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkerRequest>,
) -> AppResult<Json<WorkerResponse>> {
    payload.validate()?;
    require_admin(&auth_user)?;

    let worker = WorkerService::update_worker(state.db(), &id, payload).await?;

    Ok(Json(worker.into()))
}

/// Delete a worker
pub async fn delete_worker(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&auth_user)?;

    WorkerService::delete_worker(state.db(), &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden(
            "Only administrators can manage maintenance staff".to_string(),
        ));
    }
    Ok(())
}
