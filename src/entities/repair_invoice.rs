//! RepairInvoice entity - Entità scheda di riparazione

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RepairInvoice {
    pub id: i64,
    pub repair_invoice_id: i64,
    /// Edge obbligatorio verso il device, un device ha al massimo una scheda
    pub device_id: i64,
    // edge opzionali
    pub status_id: Option<i64>,
    pub symptom_id: Option<i64>,
}
