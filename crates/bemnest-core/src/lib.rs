//! bemnest Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for bemnest, a
//! scaffolder that turns the BEM class names of an HTML page into a nested
//! stylesheet tree, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           bemnest-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (NestService, Scaffolder, Aggregator)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Classes, Ledger)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     bemnest-adapters (Infrastructure)   │
//! │  (LocalFilesystem, ScraperClassSource)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Grammar, Segments, Layout, Plan)     │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bemnest_core::{application::NestService, domain::ProjectLayout};
//!
//! // Use the application service with injected adapters
//! let service = NestService::new(ProjectLayout::new("."), filesystem, classes, ledger);
//! let report = service.run("index.html")?;
//! println!("{} new classes", report.new_classes.len());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ClassReport, NestService, RunReport,
        ports::{ClassSource, Filesystem, LedgerStore},
    };
    pub use crate::domain::{
        ClassName, ComponentKind, ImportDirective, NestPlan, ProjectLayout, StructuralSegments,
        decompose, kind_of,
    };
    pub use crate::error::{NestError, NestResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
