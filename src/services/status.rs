//! Status services - Gestione operazioni sugli stati di riparazione

use crate::core::{AppError, AppState};
use crate::dtos::{CreateStatusDTO, PageQuery, StatusDTO, UpdateStatusDTO};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_statuses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<StatusDTO>>, AppError> {
    debug!("Listing statuses");
    let statuses = state
        .status
        .list(query.limit_or_default(), query.offset_or_default())
        .await?;

    info!("Retrieved {} statuses", statuses.len());
    let statuses_dto = statuses.into_iter().map(StatusDTO::from).collect::<Vec<_>>();
    Ok(Json(statuses_dto))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_status(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateStatusDTO>, JsonRejection>,
) -> Result<Json<StatusDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Status payload rejected: {}", err);
        AppError::bad_request("status binding failed").with_details(err.body_text())
    })?;

    // Validazione con validator
    body.validate()?;

    debug!("Creating status {}", body.status_id);
    let status = state.status.create(&body).await?;

    info!("Created status with id {}", status.id);
    Ok(Json(StatusDTO::from(status)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StatusDTO>, AppError> {
    debug!("Fetching status by id");
    let status = state
        .status
        .read(&id)
        .await?
        .ok_or_else(|| AppError::not_found("status not found"))?;

    Ok(Json(StatusDTO::from(status)))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateStatusDTO>, JsonRejection>,
) -> Result<Json<StatusDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Status payload rejected: {}", err);
        AppError::bad_request("status binding failed").with_details(err.body_text())
    })?;
    body.validate()?;

    debug!("Updating status");
    let status = state.status.update(&id, &body).await?;

    info!("Updated status {}", status.id);
    Ok(Json(StatusDTO::from(status)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("Deleting status");
    state.status.delete(&id).await?;

    info!("Deleted status {}", id);
    Ok(Json(json!({ "result": format!("ok deleted {}", id) })))
}
