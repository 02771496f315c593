//! Command handlers, one module per subcommand.

use bemnest_adapters::{JsonLedgerStore, LocalFilesystem, ScraperClassSource};
use bemnest_core::{application::NestService, domain::ProjectLayout};

pub mod classify;
pub mod completions;
pub mod config;
pub mod init;
pub mod run;

/// Wire the production adapters into a [`NestService`].
pub(crate) fn nest_service(layout: ProjectLayout) -> NestService {
    let ledger = JsonLedgerStore::new(Box::new(LocalFilesystem::new()), layout.ledger_path());
    NestService::new(
        layout,
        Box::new(LocalFilesystem::new()),
        Box::new(ScraperClassSource::new()),
        Box::new(ledger),
    )
}
