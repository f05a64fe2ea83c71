//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati.
//! Ogni repository gestisce le operazioni di database per una specifica
//! entità e traduce gli errori del driver in [`crate::core::RepoError`].

// ************************* NOTA SU SQLX ************************* //

/*
   Qui niente macro query! / query_as!: il check statico vuole un database
   già migrato in fase di compilazione (o i dati offline di cargo sqlx
   prepare), e con le migrations embedded in core::db non ce l'abbiamo.
   Si usa la versione runtime (sqlx::query_as::<_, T> con .bind), lo schema
   sta in migrations/ e le suite con #[sqlx::test] coprono tutte le query.
*/

pub mod device;
pub mod repair_invoice;
pub mod status;
pub mod symptom;
pub mod traits;

// Re-exports per facilitare l'import
pub use traits::{Create, Delete, List, Read, Update};

pub use device::DeviceRepository;
pub use repair_invoice::RepairInvoiceRepository;
pub use status::StatusRepository;
pub use symptom::SymptomRepository;
