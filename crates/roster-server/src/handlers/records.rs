//! Mutate-by-name handlers backed by the upsert store

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use roster_core::{Meta, UpsertRecord, UpsertRequest, UpsertResponse};
use tracing::warn;

pub async fn upsert(
    State(state): State<AppState>,
    payload: Result<Json<UpsertRequest>, JsonRejection>,
) -> Result<Json<UpsertResponse>, ApiError> {
    let Json(req) = payload?;

    // The store only ever sees a well-formed payload
    let meta = Meta::from_json(&req.meta).map_err(|e| {
        warn!("Rejected meta for {:?}: {}", req.name, e);
        ApiError::from(e)
    })?;

    match state.records.upsert(&req.name, meta) {
        Some(result) => Ok(Json(UpsertResponse::ok(result))),
        None => Err(ApiError::internal()),
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UpsertRecord>, ApiError> {
    match state.records.get(&name)? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::not_found()),
    }
}
