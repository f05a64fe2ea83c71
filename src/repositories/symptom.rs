//! SymptomRepository - Repository per la gestione dei sintomi

use super::{Create, Delete, List, Read, Update};
use crate::core::RepoError;
use crate::dtos::{CreateSymptomDTO, UpdateSymptomDTO};
use crate::entities::Symptom;
use sqlx::SqlitePool;

pub struct SymptomRepository {
    connection_pool: SqlitePool,
}

impl SymptomRepository {
    pub fn new(connection_pool: SqlitePool) -> SymptomRepository {
        Self { connection_pool }
    }
}

impl Create<Symptom, CreateSymptomDTO> for SymptomRepository {
    async fn create(&self, data: &CreateSymptomDTO) -> Result<Symptom, RepoError> {
        let result = sqlx::query("INSERT INTO symptoms (symptom_id, symptom_name) VALUES (?, ?)")
            .bind(data.symptom_id)
            .bind(&data.symptom_name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();

        Ok(Symptom {
            id: new_id,
            symptom_id: data.symptom_id,
            symptom_name: data.symptom_name.clone(),
        })
    }
}

impl Read<Symptom, i64> for SymptomRepository {
    async fn read(&self, id: &i64) -> Result<Option<Symptom>, RepoError> {
        let symptom = sqlx::query_as::<_, Symptom>(
            "SELECT id, symptom_id, symptom_name FROM symptoms WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(symptom)
    }
}

impl List<Symptom> for SymptomRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Symptom>, RepoError> {
        let symptoms = sqlx::query_as::<_, Symptom>(
            "SELECT id, symptom_id, symptom_name FROM symptoms ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(symptoms)
    }
}

impl Update<Symptom, UpdateSymptomDTO, i64> for SymptomRepository {
    async fn update(&self, id: &i64, data: &UpdateSymptomDTO) -> Result<Symptom, RepoError> {
        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("symptom {} does not exist", id)))?;

        sqlx::query("UPDATE symptoms SET symptom_id = ?, symptom_name = ? WHERE id = ?")
            .bind(data.symptom_id)
            .bind(&data.symptom_name)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("symptom {} does not exist", id)))
    }
}

impl Delete<i64> for SymptomRepository {
    async fn delete(&self, id: &i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM symptoms WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                Err(RepoError::NotFound(format!("symptom {} does not exist", id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(
                RepoError::Conflict(format!("symptom {} is still referenced by a repair invoice", id)),
            ),
            Err(err) => Err(err.into()),
        }
    }
}
