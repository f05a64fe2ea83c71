//! Device services - Gestione operazioni sui dispositivi

use crate::core::{AppError, AppState};
use crate::dtos::{CreateDeviceDTO, DeviceDTO, PageQuery, UpdateDeviceDTO};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_devices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<DeviceDTO>>, AppError> {
    debug!("Listing devices");
    let devices = state
        .device
        .list(query.limit_or_default(), query.offset_or_default())
        .await?;

    info!("Retrieved {} devices", devices.len());
    let devices_dto = devices.into_iter().map(DeviceDTO::from).collect::<Vec<_>>();
    Ok(Json(devices_dto))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_device(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateDeviceDTO>, JsonRejection>,
) -> Result<Json<DeviceDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Device payload rejected: {}", err);
        AppError::bad_request("device binding failed").with_details(err.body_text())
    })?;

    debug!("Creating device {}", body.device_id);
    let device = state.device.create(&body).await?;

    info!("Created device with id {}", device.id);
    Ok(Json(DeviceDTO::from(device)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeviceDTO>, AppError> {
    debug!("Fetching device by id");
    let device = state
        .device
        .read(&id)
        .await?
        .ok_or_else(|| AppError::not_found("device not found"))?;

    Ok(Json(DeviceDTO::from(device)))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateDeviceDTO>, JsonRejection>,
) -> Result<Json<DeviceDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Device payload rejected: {}", err);
        AppError::bad_request("device binding failed").with_details(err.body_text())
    })?;

    debug!("Updating device");
    let device = state.device.update(&id, &body).await?;

    info!("Updated device {}", device.id);
    Ok(Json(DeviceDTO::from(device)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_device(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("Deleting device");
    state.device.delete(&id).await?;

    info!("Deleted device {}", id);
    Ok(Json(json!({ "result": format!("ok deleted {}", id) })))
}
