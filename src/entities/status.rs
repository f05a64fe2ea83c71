//! Status entity - Entità stato di lavorazione di una riparazione

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Status {
    pub id: i64,
    pub status_id: i64,
    pub status_name: String,
}
