//! Vault configuration.
//!
//! `VaultConfig` is an immutable snapshot passed into the core per call.
//! The core never writes it; persistence and mutation belong to the host.

use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Ignore patterns applied when no configuration overrides them.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 4] = [".obsidian/**", "*.tmp", ".DS_Store", "Thumbs.db"];

/// Configuration for a single vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Absolute path to the vault root. Empty means unconfigured.
    pub root_path: PathBuf,
    /// Glob patterns for paths to hide from listing and search.
    pub ignore_patterns: Vec<String>,
    /// Whether dot-prefixed files and directories are shown.
    pub show_hidden_files: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::new(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            show_hidden_files: false,
        }
    }
}

impl VaultConfig {
    /// Load configuration from a TOML file.
    ///
    /// An explicit path must exist; without one, the platform config
    /// directory is consulted and missing files fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<VaultConfig> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path)?;
            return Ok(toml::from_str(&text)?);
        }

        if let Some(path) = default_config_path() {
            if path.is_file() {
                let text = fs::read_to_string(&path)?;
                return Ok(toml::from_str(&text)?);
            }
        }

        Ok(VaultConfig::default())
    }

    /// Replace the root path if an override is given.
    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        if let Some(root) = root {
            self.root_path = root;
        }
        self
    }

    /// Whether a root path has been set at all.
    pub fn is_configured(&self) -> bool {
        !self.root_path.as_os_str().is_empty()
    }

    /// Validate the root path and return it.
    ///
    /// Checked per call so operations always see the current disk state.
    pub fn root(&self) -> Result<&Path> {
        if !self.is_configured() {
            return Err(VaultError::VaultNotConfigured);
        }
        if !self.root_path.is_dir() {
            return Err(VaultError::VaultNotFound(self.root_path.clone()));
        }
        Ok(&self.root_path)
    }
}

/// Default config file location: `<config_dir>/vaultscope/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vaultscope").join("config.toml"))
}
