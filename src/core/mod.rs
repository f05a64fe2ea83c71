//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Bootstrap del database e migrations
//! - Gestione errori
//! - Stato applicazione

pub mod config;
pub mod db;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use db::MIGRATOR;
pub use error::{AppError, RepoError};
pub use state::AppState;
