//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica entità:
//! decodifica e valida il payload, chiama il repository e traduce l'esito
//! in uno status code tramite [`crate::core::AppError`].

pub mod device;
pub mod repair_invoice;
pub mod status;
pub mod symptom;

// Re-exports per facilitare l'import
pub use device::{create_device, delete_device, get_device, list_devices, update_device};
pub use repair_invoice::{
    create_repair_invoice, delete_repair_invoice, get_repair_invoice, list_repair_invoices,
    update_repair_invoice,
};
pub use status::{create_status, delete_status, get_status, list_statuses, update_status};
pub use symptom::{create_symptom, delete_symptom, get_symptom, list_symptoms, update_symptom};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Repair tracking server is running!")
}
