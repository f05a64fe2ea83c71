//! Device entity - Entità dispositivo consegnato in riparazione

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Device {
    /* id è il rowid assegnato dal database (usato nelle route e nelle FK),
     * device_id è il numero univoco lato negozio
     */
    pub id: i64,
    pub device_id: i64,
    pub customer_id: i64,
}
