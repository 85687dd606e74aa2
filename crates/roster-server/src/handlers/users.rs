//! User handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use roster_core::{CreateUserRequest, CreateUserResponse, User, UserId};
use tracing::{info, warn};

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let Json(req) = payload?;

    let id = state.users.add_user(&req.name).await.map_err(|e| {
        if e.is_validation() {
            warn!("Rejected user creation: {}", e);
        }
        ApiError::from(e)
    })?;

    info!("Created user {}", id);
    Ok((StatusCode::CREATED, Json(CreateUserResponse { id })))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;

    match state.users.get_user(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::not_found()),
    }
}
