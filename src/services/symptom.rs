//! Symptom services - Gestione operazioni sui sintomi

use crate::core::{AppError, AppState};
use crate::dtos::{CreateSymptomDTO, PageQuery, SymptomDTO, UpdateSymptomDTO};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_symptoms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<SymptomDTO>>, AppError> {
    debug!("Listing symptoms");
    let symptoms = state
        .symptom
        .list(query.limit_or_default(), query.offset_or_default())
        .await?;

    info!("Retrieved {} symptoms", symptoms.len());
    let symptoms_dto = symptoms.into_iter().map(SymptomDTO::from).collect::<Vec<_>>();
    Ok(Json(symptoms_dto))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_symptom(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateSymptomDTO>, JsonRejection>,
) -> Result<Json<SymptomDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Symptom payload rejected: {}", err);
        AppError::bad_request("symptom binding failed").with_details(err.body_text())
    })?;
    body.validate()?;

    debug!("Creating symptom {}", body.symptom_id);
    let symptom = state.symptom.create(&body).await?;

    info!("Created symptom with id {}", symptom.id);
    Ok(Json(SymptomDTO::from(symptom)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_symptom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SymptomDTO>, AppError> {
    debug!("Fetching symptom by id");
    let symptom = state
        .symptom
        .read(&id)
        .await?
        .ok_or_else(|| AppError::not_found("symptom not found"))?;

    Ok(Json(SymptomDTO::from(symptom)))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_symptom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateSymptomDTO>, JsonRejection>,
) -> Result<Json<SymptomDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Symptom payload rejected: {}", err);
        AppError::bad_request("symptom binding failed").with_details(err.body_text())
    })?;
    body.validate()?;

    debug!("Updating symptom");
    let symptom = state.symptom.update(&id, &body).await?;

    info!("Updated symptom {}", symptom.id);
    Ok(Json(SymptomDTO::from(symptom)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_symptom(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("Deleting symptom");
    state.symptom.delete(&id).await?;

    info!("Deleted symptom {}", id);
    Ok(Json(json!({ "result": format!("ok deleted {}", id) })))
}
