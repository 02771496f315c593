//! Implementation of the `bemnest run` command.
//!
//! Responsibility: resolve the HTML path and project layout, call the core
//! nest service, and display results. No BEM logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use bemnest_core::application::RunReport;

use crate::{
    cli::{GlobalArgs, RunArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `bemnest run` command.
///
/// Dispatch sequence:
/// 1. Resolve the HTML file (argument or interactive prompt)
/// 2. Build the project layout from config and `--root`
/// 3. Run (or dry-run) the nest service
/// 4. Render the report
#[instrument(skip_all)]
pub fn execute(
    args: RunArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let html = resolve_html(args.html, global)?;
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let layout = config.layout.to_layout(root);

    debug!(
        html = %html.display(),
        root = %layout.root().display(),
        dry_run = args.dry_run,
        "Run resolved"
    );

    let service = super::nest_service(layout);
    let report = if args.dry_run {
        service.plan(&html)?
    } else {
        service.run(&html)?
    };

    if output.is_json() {
        output.json(&report)?;
    } else {
        render(&report, &output)?;
    }
    Ok(())
}

// ── HTML path resolution ──────────────────────────────────────────────────────

fn resolve_html(html: Option<PathBuf>, global: &GlobalArgs) -> CliResult<PathBuf> {
    if let Some(html) = html {
        return Ok(html);
    }
    if can_prompt(global) {
        return prompt_for_html();
    }
    Err(CliError::InvalidInput {
        message: "no HTML file given".into(),
        source: None,
    })
}

fn can_prompt(global: &GlobalArgs) -> bool {
    use std::io::IsTerminal;

    cfg!(feature = "interactive")
        && !global.quiet
        && !global.is_json()
        && std::io::stdin().is_terminal()
}

#[cfg(feature = "interactive")]
fn prompt_for_html() -> CliResult<PathBuf> {
    let answer: String = dialoguer::Input::new()
        .with_prompt("HTML file to scaffold from")
        .default("index.html".into())
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: "could not read the HTML file name".into(),
            source: Some(Box::new(e)),
        })?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CliError::Cancelled);
    }
    Ok(PathBuf::from(answer))
}

#[cfg(not(feature = "interactive"))]
fn prompt_for_html() -> CliResult<PathBuf> {
    Err(CliError::InvalidInput {
        message: "no HTML file given".into(),
        source: None,
    })
}

// ── rendering ─────────────────────────────────────────────────────────────────

fn render(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    if report.dry_run {
        output.header(&format!("Dry run for {}", report.html.display()))?;
    } else {
        output.header(&format!("Scaffolding {}", report.html.display()))?;
    }

    output.info(&format!(
        "{} classes found, {} new",
        report.total_classes,
        report.new_classes.len()
    ))?;

    for dir in &report.created_directories {
        output.created(dir)?;
    }
    for file in &report.created_files {
        output.created(file)?;
    }
    for import in &report.appended_imports {
        output.print(&format!(
            "  {} <- {}",
            report.root_stylesheet.display(),
            import
        ))?;
    }

    if !report.kept_files.is_empty() {
        output.info(&format!(
            "{} stylesheet(s) already existed and were left untouched",
            report.kept_files.len()
        ))?;
    }

    if !report.unrecognized.is_empty() {
        let names: Vec<&str> = report.unrecognized.iter().map(|c| c.as_str()).collect();
        output.warning(&format!(
            "Skipped {} class(es) that are not BEM names: {}",
            names.len(),
            names.join(", ")
        ))?;
    }

    let summary = format!(
        "{} directories, {} stylesheets, {} imports",
        report.created_directories.len(),
        report.created_files.len(),
        report.appended_imports.len()
    );
    if report.is_noop() {
        output.success("Nothing new to scaffold")?;
    } else if report.dry_run {
        output.success(&format!("Would create {summary}"))?;
    } else {
        output.success(&format!("Created {summary}"))?;
    }

    Ok(())
}
