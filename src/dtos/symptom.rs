//! Symptom DTOs - request/response shapes for the symptom endpoints

use crate::entities::Symptom;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Response shape for a persisted symptom.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymptomDTO {
    pub id: i64,
    pub symptom_id: i64,
    pub symptom_name: String,
}

impl From<Symptom> for SymptomDTO {
    fn from(value: Symptom) -> Self {
        Self {
            id: value.id,
            symptom_id: value.symptom_id,
            symptom_name: value.symptom_name,
        }
    }
}

/// DTO for creating a symptom. The name must be non-empty.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateSymptomDTO {
    pub symptom_id: i64,
    #[validate(length(min = 1, message = "symptom_name must not be empty"))]
    pub symptom_name: String,
}

/// DTO for a full-record update; every field of the row is overwritten.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateSymptomDTO {
    pub symptom_id: i64,
    #[validate(length(min = 1, message = "symptom_name must not be empty"))]
    pub symptom_name: String,
}
