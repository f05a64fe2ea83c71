//! Entities module - Entità persistite del dominio riparazioni
//!
//! Ogni entità corrisponde a una tabella del database; le colonne di
//! relazione e i relativi vincoli vivono nello schema SQL sotto `migrations/`.

pub mod device;
pub mod repair_invoice;
pub mod status;
pub mod symptom;

// Re-exports per facilitare l'import
pub use device::Device;
pub use repair_invoice::RepairInvoice;
pub use status::Status;
pub use symptom::Symptom;
