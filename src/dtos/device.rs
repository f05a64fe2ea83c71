//! Device DTOs - request/response shapes for the device endpoints

use crate::entities::Device;
use serde::{Deserialize, Serialize};

/// Response shape for a persisted device.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeviceDTO {
    pub id: i64,
    pub device_id: i64,
    pub customer_id: i64,
}

impl From<Device> for DeviceDTO {
    fn from(value: Device) -> Self {
        Self {
            id: value.id,
            device_id: value.device_id,
            customer_id: value.customer_id,
        }
    }
}

/// DTO for creating a device (no id, the store assigns one).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateDeviceDTO {
    pub device_id: i64,
    pub customer_id: i64,
}

/// DTO for a full-record update; every field of the row is overwritten.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateDeviceDTO {
    pub device_id: i64,
    pub customer_id: i64,
}
