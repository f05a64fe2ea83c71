//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione client-server:
//! per ogni entità un `CreateXxxDTO` accettato dalla POST, un `UpdateXxxDTO`
//! accettato dalla PUT e un `XxxDTO` ritornato da ogni handler.
//! Gli id assegnati dal database non compaiono mai nei body delle richieste.

pub mod device;
pub mod query;
pub mod repair_invoice;
pub mod status;
pub mod symptom;

// Re-exports per facilitare l'import
pub use device::{CreateDeviceDTO, DeviceDTO, UpdateDeviceDTO};
pub use query::PageQuery;
pub use repair_invoice::{CreateRepairInvoiceDTO, RepairInvoiceDTO, UpdateRepairInvoiceDTO};
pub use status::{CreateStatusDTO, StatusDTO, UpdateStatusDTO};
pub use symptom::{CreateSymptomDTO, SymptomDTO, UpdateSymptomDTO};
