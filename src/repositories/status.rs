//! StatusRepository - Repository per la gestione degli stati di riparazione

use super::{Create, Delete, List, Read, Update};
use crate::core::RepoError;
use crate::dtos::{CreateStatusDTO, UpdateStatusDTO};
use crate::entities::Status;
use sqlx::SqlitePool;

pub struct StatusRepository {
    connection_pool: SqlitePool,
}

impl StatusRepository {
    pub fn new(connection_pool: SqlitePool) -> StatusRepository {
        Self { connection_pool }
    }
}

impl Create<Status, CreateStatusDTO> for StatusRepository {
    async fn create(&self, data: &CreateStatusDTO) -> Result<Status, RepoError> {
        let result = sqlx::query("INSERT INTO statuses (status_id, status_name) VALUES (?, ?)")
            .bind(data.status_id)
            .bind(&data.status_name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        Ok(Status {
            id: new_id,
            status_id: data.status_id,
            status_name: data.status_name.clone(),
        })
    }
}

impl Read<Status, i64> for StatusRepository {
    async fn read(&self, id: &i64) -> Result<Option<Status>, RepoError> {
        let status = sqlx::query_as::<_, Status>(
            "SELECT id, status_id, status_name FROM statuses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(status)
    }
}

impl List<Status> for StatusRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Status>, RepoError> {
        let statuses = sqlx::query_as::<_, Status>(
            "SELECT id, status_id, status_name FROM statuses ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(statuses)
    }
}

impl Update<Status, UpdateStatusDTO, i64> for StatusRepository {
    async fn update(&self, id: &i64, data: &UpdateStatusDTO) -> Result<Status, RepoError> {
        // prima leggo, se la riga non c'è è NotFound
        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("status {} does not exist", id)))?;

        sqlx::query("UPDATE statuses SET status_id = ?, status_name = ? WHERE id = ?")
            .bind(data.status_id)
            .bind(&data.status_name)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("status {} does not exist", id)))
    }
}

impl Delete<i64> for StatusRepository {
    async fn delete(&self, id: &i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM statuses WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                Err(RepoError::NotFound(format!("status {} does not exist", id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(
                RepoError::Conflict(format!("status {} is still referenced by a repair invoice", id)),
            ),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: il CHECK del database blocca i nomi vuoti anche sotto la validazione del DTO
    #[sqlx::test]
    async fn test_store_rejects_empty_status_name(pool: SqlitePool) -> Result<(), RepoError> {
        let repo = StatusRepository::new(pool);

        let err = repo
            .create(&CreateStatusDTO {
                status_id: 30,
                status_name: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Validation(_)));

        Ok(())
    }

    /// Test: deleting a status linked from an invoice is blocked
    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("devices", "statuses", "symptoms", "repair_invoices")
    ))]
    async fn test_delete_status_restricted_when_referenced(
        pool: SqlitePool,
    ) -> Result<(), RepoError> {
        let repo = StatusRepository::new(pool);

        let err = repo.delete(&1).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        assert!(repo.read(&1).await?.is_some());

        Ok(())
    }
}
