//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository condivisi tra le route.

use crate::repositories::{
    DeviceRepository, RepairInvoiceRepository, StatusRepository, SymptomRepository,
};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei dispositivi
    pub device: DeviceRepository,

    /// Repository per la gestione degli stati di riparazione
    pub status: StatusRepository,

    /// Repository per la gestione dei sintomi
    pub symptom: SymptomRepository,

    /// Repository per la gestione delle schede di riparazione
    pub invoice: RepairInvoiceRepository,
}

impl AppState {
    /// Crea lo stato applicativo inizializzando ogni repository
    /// con la pool di connessioni.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            device: DeviceRepository::new(pool.clone()),
            status: StatusRepository::new(pool.clone()),
            symptom: SymptomRepository::new(pool.clone()),
            invoice: RepairInvoiceRepository::new(pool),
        }
    }
}
