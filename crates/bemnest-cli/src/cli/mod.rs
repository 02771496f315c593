//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bemnest",
    bin_name = "bemnest",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Nested BEM stylesheet scaffolding",
    long_about = "bemnest reads the class names of an HTML page and creates a \
                  nested block/element/modifier stylesheet tree for every new \
                  BEM class, importing new blocks into the page's root stylesheet.",
    after_help = "EXAMPLES:\n\
        \x20 bemnest run index.html\n\
        \x20 bemnest run index.html --root site --dry-run\n\
        \x20 bemnest classify index.html --kind element\n\
        \x20 bemnest completions bash > /usr/share/bash-completion/completions/bemnest",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the new classes of an HTML page.
    #[command(
        visible_alias = "r",
        about = "Scaffold stylesheets for new BEM classes",
        after_help = "EXAMPLES:\n\
            \x20 bemnest run index.html\n\
            \x20 bemnest run pages/about.html --root .\n\
            \x20 bemnest run index.html --dry-run"
    )]
    Run(RunArgs),

    /// Show the BEM kind of every class in a page.
    #[command(
        visible_alias = "cl",
        about = "Classify the classes of an HTML page",
        after_help = "EXAMPLES:\n\
            \x20 bemnest classify index.html\n\
            \x20 bemnest classify index.html --kind block-modifier\n\
            \x20 bemnest --output-format json classify index.html"
    )]
    Classify(ClassifyArgs),

    /// Initialise a bemnest configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 bemnest init           # .bemnest.toml in the current directory\n\
            \x20 bemnest init --global  # user-wide config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bemnest completions bash > ~/.local/share/bash-completion/completions/bemnest\n\
            \x20 bemnest completions zsh  > ~/.zfunc/_bemnest\n\
            \x20 bemnest completions fish > ~/.config/fish/completions/bemnest.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the bemnest configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bemnest config get layout.blocks_dir\n\
            \x20 bemnest config list\n\
            \x20 bemnest config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `bemnest run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// HTML file to read classes from.  Prompted for when omitted.
    #[arg(value_name = "HTML", help = "HTML file to read classes from")]
    pub html: Option<PathBuf>,

    /// Project root holding the blocks and pages directories.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `bemnest classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// HTML file to read classes from.
    #[arg(value_name = "HTML", help = "HTML file to read classes from")]
    pub html: PathBuf,

    /// Only list classes of this kind.
    ///
    /// Parsed by the core so that spellings like `block modifier` or `bm`
    /// work too.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        help = "Filter by kind: block, block-modifier, element, element-modifier"
    )]
    pub kind: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `bemnest init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bemnest completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bemnest config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.extension`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
