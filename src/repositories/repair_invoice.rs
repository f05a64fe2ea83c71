//! RepairInvoiceRepository - Repository per la gestione delle schede di riparazione

use super::{Create, Delete, List, Read, Update};
use crate::core::RepoError;
use crate::dtos::{CreateRepairInvoiceDTO, UpdateRepairInvoiceDTO};
use crate::entities::RepairInvoice;
use sqlx::SqlitePool;

pub struct RepairInvoiceRepository {
    connection_pool: SqlitePool,
}

impl RepairInvoiceRepository {
    pub fn new(connection_pool: SqlitePool) -> RepairInvoiceRepository {
        Self { connection_pool }
    }

    /// Find the invoice attached to a device, if any. A device carries at
    /// most one invoice.
    pub async fn find_by_device(&self, device_id: &i64) -> Result<Option<RepairInvoice>, RepoError> {
        let invoice = sqlx::query_as::<_, RepairInvoice>(
            "SELECT id, repair_invoice_id, device_id, status_id, symptom_id \
             FROM repair_invoices WHERE device_id = ?",
        )
        .bind(device_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(invoice)
    }

    // edge obbligatorio: un device mancante deve uscire come errore di
    // validazione, non come violazione FK grezza
    async fn ensure_device_exists(&self, device_id: &i64) -> Result<(), RepoError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM devices WHERE id = ?")
            .bind(device_id)
            .fetch_optional(&self.connection_pool)
            .await?;

        match found {
            Some(_) => Ok(()),
            None => Err(RepoError::Validation(format!(
                "device {} does not exist",
                device_id
            ))),
        }
    }
}

impl Create<RepairInvoice, CreateRepairInvoiceDTO> for RepairInvoiceRepository {
    async fn create(&self, data: &CreateRepairInvoiceDTO) -> Result<RepairInvoice, RepoError> {
        self.ensure_device_exists(&data.device_id).await?;

        let result = sqlx::query(
            "INSERT INTO repair_invoices (repair_invoice_id, device_id, status_id, symptom_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(data.repair_invoice_id)
        .bind(data.device_id)
        .bind(data.status_id)
        .bind(data.symptom_id)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();

        Ok(RepairInvoice {
            id: new_id,
            repair_invoice_id: data.repair_invoice_id,
            device_id: data.device_id,
            status_id: data.status_id,
            symptom_id: data.symptom_id,
        })
    }
}

impl Read<RepairInvoice, i64> for RepairInvoiceRepository {
    async fn read(&self, id: &i64) -> Result<Option<RepairInvoice>, RepoError> {
        let invoice = sqlx::query_as::<_, RepairInvoice>(
            "SELECT id, repair_invoice_id, device_id, status_id, symptom_id \
             FROM repair_invoices WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(invoice)
    }
}

impl List<RepairInvoice> for RepairInvoiceRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<RepairInvoice>, RepoError> {
        let invoices = sqlx::query_as::<_, RepairInvoice>(
            "SELECT id, repair_invoice_id, device_id, status_id, symptom_id \
             FROM repair_invoices ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(invoices)
    }
}

impl Update<RepairInvoice, UpdateRepairInvoiceDTO, i64> for RepairInvoiceRepository {
    async fn update(&self, id: &i64, data: &UpdateRepairInvoiceDTO) -> Result<RepairInvoice, RepoError> {
        // Fetch first so a missing row surfaces as NotFound
        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("repair invoice {} does not exist", id)))?;

        self.ensure_device_exists(&data.device_id).await?;

        sqlx::query(
            "UPDATE repair_invoices \
             SET repair_invoice_id = ?, device_id = ?, status_id = ?, symptom_id = ? \
             WHERE id = ?",
        )
        .bind(data.repair_invoice_id)
        .bind(data.device_id)
        .bind(data.status_id)
        .bind(data.symptom_id)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("repair invoice {} does not exist", id)))
    }
}

impl Delete<i64> for RepairInvoiceRepository {
    async fn delete(&self, id: &i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM repair_invoices WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "repair invoice {} does not exist",
                id
            )));
        }

        Ok(())
    }
}
