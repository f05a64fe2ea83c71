//! Repair tracking server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/devices", configure_device_routes())
        .nest("/statuses", configure_status_routes())
        .nest("/symptoms", configure_symptom_routes())
        .nest("/repair-invoices", configure_repair_invoice_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes dei dispositivi
fn configure_device_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_devices).post(create_device))
        .route(
            "/{id}",
            get(get_device).put(update_device).delete(delete_device),
        )
}

/// Configura le routes degli stati di riparazione
fn configure_status_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_statuses).post(create_status))
        .route(
            "/{id}",
            get(get_status).put(update_status).delete(delete_status),
        )
}

/// Configura le routes dei sintomi
fn configure_symptom_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_symptoms).post(create_symptom))
        .route(
            "/{id}",
            get(get_symptom).put(update_symptom).delete(delete_symptom),
        )
}

/// Configura le routes delle schede di riparazione
fn configure_repair_invoice_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_repair_invoices).post(create_repair_invoice))
        .route(
            "/{id}",
            get(get_repair_invoice)
                .put(update_repair_invoice)
                .delete(delete_repair_invoice),
        )
}
