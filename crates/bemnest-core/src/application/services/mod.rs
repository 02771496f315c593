//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold the new classes of a page".

pub mod import_aggregator;
pub mod nest_service;
pub mod report;
pub mod scaffolder;

pub use import_aggregator::ImportAggregator;
pub use nest_service::NestService;
pub use report::{ClassReport, RunReport};
pub use scaffolder::{ScaffoldOutcome, Scaffolder};
