//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ProjectLayout`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, handled at the call-site)
//! 2. Environment variables `BEMNEST__<SECTION>__<KEY>`
//! 3. Config file: `--config`, else `./.bemnest.toml`, else the user config
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use bemnest_core::domain::{
    ProjectLayout,
    layout::{DEFAULT_BLOCKS_DIR, DEFAULT_EXTENSION, DEFAULT_LEDGER_FILE, DEFAULT_PAGES_DIR},
};

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".bemnest.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where things go inside a project.
    pub layout: LayoutConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub blocks_dir: String,
    pub pages_dir: String,
    pub extension: String,
    pub ledger_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig {
                blocks_dir: DEFAULT_BLOCKS_DIR.into(),
                pages_dir: DEFAULT_PAGES_DIR.into(),
                extension: DEFAULT_EXTENSION.into(),
                ledger_file: DEFAULT_LEDGER_FILE.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl LayoutConfig {
    /// Build the core layout for a project rooted at `root`.
    pub fn to_layout(&self, root: impl Into<PathBuf>) -> ProjectLayout {
        ProjectLayout::new(root)
            .with_blocks_dir(&self.blocks_dir)
            .with_pages_dir(&self.pages_dir)
            .with_extension(&self.extension)
            .with_ledger_file(&self.ledger_file)
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, Environment::with_prefix("BEMNEST"))
    }

    fn load_with_env(config_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::active_path(None).as_path()).required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file [`Self::load`] reads: `explicit`, else `./.bemnest.toml`
    /// when present, else the user config file.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::config_path()
    }

    /// Path to the user-wide configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.bemnest.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "bemnest", "bemnest")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, as shown by `bemnest config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "layout.blocks_dir" => self.layout.blocks_dir.clone(),
            "layout.pages_dir" => self.layout.pages_dir.clone(),
            "layout.extension" => self.layout.extension.clone(),
            "layout.ledger_file" => self.layout.ledger_file.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
