//! Implementation of the `bemnest classify` command.

use std::str::FromStr;

use bemnest_core::{application::ClassReport, domain::ComponentKind, error::NestError};

use crate::{
    cli::ClassifyArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ClassifyArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = args
        .kind
        .as_deref()
        .map(ComponentKind::from_str)
        .transpose()
        .map_err(|e| CliError::Core(NestError::from(e)))?;

    let service = super::nest_service(config.layout.to_layout("."));
    let reports = service.classify(&args.html, kind)?;

    if output.is_json() {
        output.json(&reports)?;
        return Ok(());
    }

    if reports.is_empty() {
        output.info("No matching classes")?;
        return Ok(());
    }

    let width = reports
        .iter()
        .map(|r| r.class_name.as_str().len())
        .max()
        .unwrap_or(0);
    for report in &reports {
        output.print(&row(report, width))?;
    }
    Ok(())
}

/// `<class>  <kind>  <directory>`, padded to line up.
fn row(report: &ClassReport, width: usize) -> String {
    let kind = report
        .kind
        .map(|k| k.as_str())
        .unwrap_or("unrecognized");
    let directory = report
        .directory
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "-".into());
    format!(
        "{:<width$}  {:<16}  {}",
        report.class_name.as_str(),
        kind,
        directory
    )
}
