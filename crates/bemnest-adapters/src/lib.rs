//! Infrastructure adapters for bemnest.
//!
//! This crate implements the ports defined in `bemnest-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod html;
pub mod ledger;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use html::ScraperClassSource;
pub use ledger::JsonLedgerStore;
