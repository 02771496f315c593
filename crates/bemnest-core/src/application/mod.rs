//! Application layer for bemnest.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (NestService, Scaffolder, ImportAggregator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. All BEM rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ClassReport, // DTO for classify output
    ImportAggregator,
    NestService,
    RunReport,
    ScaffoldOutcome,
    Scaffolder,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ClassSource, Filesystem, LedgerStore};

pub use error::ApplicationError;
