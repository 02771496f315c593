//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `bemnest-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ClassSource`: HTML class extraction
//!   - `LedgerStore`: Used-classes persistence
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ClassSource, Filesystem, LedgerStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockLedgerStore};
