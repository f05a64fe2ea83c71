//! Symptom entity - Entità guasto segnalato dal cliente

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Symptom {
    pub id: i64,
    pub symptom_id: i64,
    pub symptom_name: String,
}
