//! Whole-tree content search.
//!
//! A single-pass depth-first walk collects candidate files, then each file
//! is scanned line by line for a case-insensitive regex. Cancellation is
//! cooperative: the token is polled once per file, before opening it, so an
//! in-progress file scan always completes.

use crate::config::VaultConfig;
use crate::error::Result;
use crate::filter::PathFilter;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// File extensions whose contents are scanned. Anything else is never
/// opened.
pub const SEARCHABLE_EXTENSIONS: [&str; 6] = ["md", "txt", "json", "csv", "html", "xml"];

/// Cooperative cancellation flag, shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One match of the search term in a file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchMatch {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The matched line, trimmed.
    pub text: String,
    /// The matched line plus up to one line before and after, joined with
    /// newlines and clipped at file boundaries.
    pub context: String,
}

/// Progress snapshot reported after each processed file.
#[derive(Debug, Clone)]
pub struct SearchProgress {
    pub processed: usize,
    pub total: usize,
    pub message: String,
}

impl SearchProgress {
    /// Fraction of candidate files processed so far.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }
}

/// Recursive content search over a vault.
pub struct SearchEngine<'a> {
    config: &'a VaultConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(config: &'a VaultConfig) -> Self {
        Self { config }
    }

    /// Search every searchable file under the vault root for `term`,
    /// treated as a case-insensitive regular expression.
    ///
    /// Matches arrive in file-traversal order, then line order, then match
    /// order within a line. Unreadable files are logged and skipped; the
    /// search completes with partial results. A malformed term fails the
    /// whole search with [`crate::VaultError::InvalidPattern`] before any
    /// file is opened.
    pub fn search<F>(&self, term: &str, cancel: &CancelToken, mut on_progress: F) -> Result<Vec<SearchMatch>>
    where
        F: FnMut(&SearchProgress),
    {
        let root = self.config.root()?.to_path_buf();
        let regex = RegexBuilder::new(term).case_insensitive(true).build()?;
        let filter = PathFilter::new(self.config);

        let mut files = Vec::new();
        collect_files(&root, &root, &filter, &mut files);
        let total = files.len();

        let mut matches = Vec::new();
        for (index, file) in files.iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }

            match fs::read_to_string(file) {
                Ok(content) => scan_content(file, &content, &regex, &mut matches),
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "skipping unreadable file");
                }
            }

            let processed = index + 1;
            on_progress(&SearchProgress {
                processed,
                total,
                message: format!("Searching... ({processed}/{total})"),
            });
        }

        Ok(matches)
    }
}

/// Depth-first collection of searchable files, applying the filter to both
/// files and directories. A filtered directory is never descended into.
fn collect_files(root: &Path, dir: &Path, filter: &PathFilter, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };

    // Sort by name so traversal order is deterministic across platforms.
    let mut entries: Vec<_> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();

        if !filter.is_visible(&relative, &name) {
            continue;
        }

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => {
                collect_files(root, &path, filter, files);
            }
            Ok(_) => {
                if is_searchable(&path) {
                    files.push(path);
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry with unknown type");
            }
        }
    }
}

fn is_searchable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SEARCHABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Emit one match per regex hit, with a one-line-each-side context window.
fn scan_content(file: &Path, content: &str, regex: &Regex, out: &mut Vec<SearchMatch>) {
    let lines: Vec<&str> = content.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        for _ in regex.find_iter(line) {
            let start = index.saturating_sub(1);
            let end = (index + 1).min(lines.len() - 1);
            out.push(SearchMatch {
                file: file.to_path_buf(),
                line: index + 1,
                text: line.trim().to_string(),
                context: lines[start..=end].join("\n"),
            });
        }
    }
}
