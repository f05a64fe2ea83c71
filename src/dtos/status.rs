//! Status DTOs - request/response shapes for the status endpoints

use crate::entities::Status;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Response shape for a persisted status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDTO {
    pub id: i64,
    pub status_id: i64,
    pub status_name: String,
}

impl From<Status> for StatusDTO {
    fn from(value: Status) -> Self {
        Self {
            id: value.id,
            status_id: value.status_id,
            status_name: value.status_name,
        }
    }
}

/// DTO for creating a status. The name must be non-empty.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateStatusDTO {
    pub status_id: i64,
    #[validate(length(min = 1, message = "status_name must not be empty"))]
    pub status_name: String,
}

/// DTO for a full-record update; every field of the row is overwritten.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateStatusDTO {
    pub status_id: i64,
    #[validate(length(min = 1, message = "status_name must not be empty"))]
    pub status_name: String,
}
