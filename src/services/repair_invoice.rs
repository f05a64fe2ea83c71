//! Repair invoice services - Gestione operazioni sulle schede di riparazione

use crate::core::{AppError, AppState};
use crate::dtos::{CreateRepairInvoiceDTO, PageQuery, RepairInvoiceDTO, UpdateRepairInvoiceDTO};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_repair_invoices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<RepairInvoiceDTO>>, AppError> {
    debug!("Listing repair invoices");
    let invoices = state
        .invoice
        .list(query.limit_or_default(), query.offset_or_default())
        .await?;

    info!("Retrieved {} repair invoices", invoices.len());
    let invoices_dto = invoices
        .into_iter()
        .map(RepairInvoiceDTO::from)
        .collect::<Vec<_>>();
    Ok(Json(invoices_dto))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_repair_invoice(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateRepairInvoiceDTO>, JsonRejection>,
) -> Result<Json<RepairInvoiceDTO>, AppError> {
    // 1. Decodificare il body della richiesta (errore BAD_REQUEST se malformato)
    // 2. Salvare la scheda nel database: il repository risolve l'edge obbligatorio verso il device
    // 3. Numero scheda duplicato o device già coperto -> errore CONFLICT dal vincolo UNIQUE
    // 4. Convertire in RepairInvoiceDTO e ritornare come risposta JSON
    let Json(body) = body.map_err(|err| {
        warn!("Repair invoice payload rejected: {}", err);
        AppError::bad_request("repair invoice binding failed").with_details(err.body_text())
    })?;

    debug!("Creating repair invoice {} for device {}", body.repair_invoice_id, body.device_id);
    let invoice = state.invoice.create(&body).await?;

    info!("Created repair invoice with id {}", invoice.id);
    Ok(Json(RepairInvoiceDTO::from(invoice)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn get_repair_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RepairInvoiceDTO>, AppError> {
    debug!("Fetching repair invoice by id");
    let invoice = state
        .invoice
        .read(&id)
        .await?
        .ok_or_else(|| AppError::not_found("repair invoice not found"))?;

    Ok(Json(RepairInvoiceDTO::from(invoice)))
}

#[instrument(skip(state, body), fields(id = %id))]
pub async fn update_repair_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateRepairInvoiceDTO>, JsonRejection>,
) -> Result<Json<RepairInvoiceDTO>, AppError> {
    let Json(body) = body.map_err(|err| {
        warn!("Repair invoice payload rejected: {}", err);
        AppError::bad_request("repair invoice binding failed").with_details(err.body_text())
    })?;

    debug!("Updating repair invoice");
    let invoice = state.invoice.update(&id, &body).await?;

    info!("Updated repair invoice {}", invoice.id);
    Ok(Json(RepairInvoiceDTO::from(invoice)))
}

#[instrument(skip(state), fields(id = %id))]
pub async fn delete_repair_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    debug!("Deleting repair invoice");
    state.invoice.delete(&id).await?;

    info!("Deleted repair invoice {}", id);
    Ok(Json(json!({ "result": format!("ok deleted {}", id) })))
}
