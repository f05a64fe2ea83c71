//! Repair invoice DTOs - request/response shapes for the invoice endpoints

use crate::entities::RepairInvoice;
use serde::{Deserialize, Serialize};

/// Response shape for a persisted repair invoice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepairInvoiceDTO {
    pub id: i64,
    pub repair_invoice_id: i64,
    pub device_id: i64,
    pub status_id: Option<i64>,
    pub symptom_id: Option<i64>,
}

impl From<RepairInvoice> for RepairInvoiceDTO {
    fn from(value: RepairInvoice) -> Self {
        Self {
            id: value.id,
            repair_invoice_id: value.repair_invoice_id,
            device_id: value.device_id,
            status_id: value.status_id,
            symptom_id: value.symptom_id,
        }
    }
}

/// DTO for creating a repair invoice. The device link is required and must
/// point at an existing device; status and symptom links are optional.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateRepairInvoiceDTO {
    pub repair_invoice_id: i64,
    pub device_id: i64,
    pub status_id: Option<i64>,
    pub symptom_id: Option<i64>,
}

///se status_id o symptom_id mancano nel body il link viene azzerato
/// DTO for a full-record update; every field of the row is overwritten
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateRepairInvoiceDTO {
    pub repair_invoice_id: i64,
    pub device_id: i64,
    pub status_id: Option<i64>,
    pub symptom_id: Option<i64>,
}
