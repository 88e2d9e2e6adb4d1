//! Path visibility rules for listing and search.

use crate::config::VaultConfig;
use crate::glob::glob_match;
use std::path::Path;

/// Decides whether a vault-relative path is visible, given the configured
/// ignore patterns and hidden-file policy.
///
/// Pure with respect to its inputs; performs no I/O.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignore_patterns: Vec<String>,
    show_hidden_files: bool,
}

impl PathFilter {
    pub fn new(config: &VaultConfig) -> Self {
        Self {
            ignore_patterns: config.ignore_patterns.clone(),
            show_hidden_files: config.show_hidden_files,
        }
    }

    /// Whether the entry at `relative_path` (named `file_name`) is visible.
    ///
    /// Hidden files are checked first; then each ignore pattern is tried
    /// against both the full relative path and the basename alone, so a
    /// pattern like `*.tmp` catches files at any depth without `**/*.tmp`.
    pub fn is_visible(&self, relative_path: &Path, file_name: &str) -> bool {
        if !self.show_hidden_files && file_name.starts_with('.') {
            return false;
        }

        let relative = normalize(relative_path);
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &relative) || glob_match(pattern, file_name))
    }
}

/// Render a path with `/` separators regardless of platform.
fn normalize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
