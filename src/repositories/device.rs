//! DeviceRepository - Repository per la gestione dei dispositivi

use super::{Create, Delete, List, Read, Update};
use crate::core::RepoError;
use crate::dtos::{CreateDeviceDTO, UpdateDeviceDTO};
use crate::entities::Device;
use sqlx::SqlitePool;

pub struct DeviceRepository {
    connection_pool: SqlitePool,
}

impl DeviceRepository {
    pub fn new(connection_pool: SqlitePool) -> DeviceRepository {
        Self { connection_pool }
    }

    ///il device_id è il numero univoco lato negozio, non il rowid
    /// Find device by exact device number match
    pub async fn find_by_device_id(&self, device_id: &i64) -> Result<Option<Device>, RepoError> {
        let device = sqlx::query_as::<_, Device>(
            "SELECT id, device_id, customer_id FROM devices WHERE device_id = ?",
        )
        .bind(device_id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(device)
    }
}

impl Create<Device, CreateDeviceDTO> for DeviceRepository {
    async fn create(&self, data: &CreateDeviceDTO) -> Result<Device, RepoError> {
        let result = sqlx::query("INSERT INTO devices (device_id, customer_id) VALUES (?, ?)")
            .bind(data.device_id)
            .bind(data.customer_id)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        Ok(Device {
            id: new_id,
            device_id: data.device_id,
            customer_id: data.customer_id,
        })
    }
}

impl Read<Device, i64> for DeviceRepository {
    async fn read(&self, id: &i64) -> Result<Option<Device>, RepoError> {
        let device = sqlx::query_as::<_, Device>(
            "SELECT id, device_id, customer_id FROM devices WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(device)
    }
}

impl List<Device> for DeviceRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Device>, RepoError> {
        let devices = sqlx::query_as::<_, Device>(
            "SELECT id, device_id, customer_id FROM devices ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(devices)
    }
}

impl Update<Device, UpdateDeviceDTO, i64> for DeviceRepository {
    async fn update(&self, id: &i64, data: &UpdateDeviceDTO) -> Result<Device, RepoError> {
        // Ensure the row exists before touching it
        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("device {} does not exist", id)))?;

        sqlx::query("UPDATE devices SET device_id = ?, customer_id = ? WHERE id = ?")
            .bind(data.device_id)
            .bind(data.customer_id)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("device {} does not exist", id)))
    }
}

impl Delete<i64> for DeviceRepository {
    async fn delete(&self, id: &i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM devices WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                Err(RepoError::NotFound(format!("device {} does not exist", id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(
                RepoError::Conflict(format!("device {} is still referenced by a repair invoice", id)),
            ),
            Err(err) => Err(err.into()),
        }
    }
}
