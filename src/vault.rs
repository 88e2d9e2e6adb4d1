//! Vault tree enumeration and mutation.

use crate::config::VaultConfig;
use crate::error::{Result, VaultError};
use crate::filter::PathFilter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::warn;

/// Kind of a vault tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of a directory listing. Produced fresh on every call; nodes
/// carry no identity beyond their path.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Handle returned by [`Vault::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type InvalidationCallback = Box<dyn Fn() + Send + Sync>;

/// A vault of notes: lists one directory level at a time and mutates the
/// tree, notifying subscribers after every successful mutation.
///
/// All operations validate against the current disk state rather than any
/// cached view, so stale listings never drive a mutation.
pub struct Vault {
    config: VaultConfig,
    subscribers: Mutex<Vec<(u64, InvalidationCallback)>>,
    next_subscription: AtomicU64,
}

impl Vault {
    pub fn new(config: VaultConfig) -> Self {
        Self {
            config,
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Register a callback fired after each successful mutation.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.lock_subscribers().push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock_subscribers().retain(|(sub_id, _)| *sub_id != id.0);
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(u64, InvalidationCallback)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn notify(&self) {
        for (_, callback) in self.lock_subscribers().iter() {
            callback();
        }
    }

    /// Join a vault-relative path onto the validated root.
    fn resolve(&self, relative: &Path) -> Result<PathBuf> {
        Ok(self.config.root()?.join(relative))
    }

    /// List the immediate children of a vault-relative directory, filtered
    /// and sorted: directories first, then files, each group ascending
    /// case-insensitively by name.
    ///
    /// A directory that cannot be read yields an empty list rather than an
    /// error, so sibling directories stay browsable.
    pub fn list_children(&self, dir: &Path) -> Result<Vec<Node>> {
        let root = self.config.root()?.to_path_buf();
        let absolute = root.join(dir);
        let filter = PathFilter::new(&self.config);

        let entries = match fs::read_dir(&absolute) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %absolute.display(), error = %e, "failed to read directory");
                return Ok(Vec::new());
            }
        };

        let mut nodes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %absolute.display(), error = %e, "failed to read directory entry");
                    continue;
                }
            };

            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();

            if !filter.is_visible(&relative, &name) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to stat entry");
                    continue;
                }
            };

            let kind = if metadata.is_dir() {
                NodeKind::Directory
            } else {
                NodeKind::File
            };
            nodes.push(Node { name, path, kind });
        }

        nodes.sort_by(|a, b| {
            match (a.kind, b.kind) {
                (NodeKind::Directory, NodeKind::File) => std::cmp::Ordering::Less,
                (NodeKind::File, NodeKind::Directory) => std::cmp::Ordering::Greater,
                _ => a
                    .name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name)),
            }
        });

        Ok(nodes)
    }

    /// Create an empty note file under a vault-relative directory.
    ///
    /// Names without an extension get `.md` appended.
    pub fn create_file(&self, parent_dir: &Path, name: &str) -> Result<PathBuf> {
        let dir = self.resolve(parent_dir)?;

        let file_name = if name.contains('.') {
            name.to_string()
        } else {
            format!("{name}.md")
        };

        let target = dir.join(&file_name);
        if target.exists() {
            return Err(VaultError::AlreadyExists(target));
        }

        fs::write(&target, "")?;
        self.notify();
        Ok(target)
    }

    /// Create a folder (and any missing parents) under a vault-relative
    /// directory.
    pub fn create_folder(&self, parent_dir: &Path, name: &str) -> Result<PathBuf> {
        let dir = self.resolve(parent_dir)?;

        let target = dir.join(name);
        if target.exists() {
            return Err(VaultError::AlreadyExists(target));
        }

        fs::create_dir_all(&target)?;
        self.notify();
        Ok(target)
    }

    /// Delete a file or directory (recursively).
    ///
    /// With `use_trash`, the item is moved to the platform trash so the
    /// deletion is recoverable; if the platform refuses, removal falls back
    /// to being permanent.
    pub fn delete_item(&self, relative: &Path, use_trash: bool) -> Result<()> {
        let target = self.resolve(relative)?;
        if !target.exists() {
            return Err(VaultError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such item: {}", target.display()),
            )));
        }

        if use_trash {
            match trash::delete(&target) {
                Ok(()) => {
                    self.notify();
                    return Ok(());
                }
                Err(e) => {
                    warn!(path = %target.display(), error = %e, "platform trash unavailable, removing permanently");
                }
            }
        }

        if target.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
        self.notify();
        Ok(())
    }

    /// Rename a file or directory in place, keeping its parent directory.
    pub fn rename_item(&self, relative: &Path, new_name: &str) -> Result<PathBuf> {
        let source = self.resolve(relative)?;
        let target = source.with_file_name(new_name);

        if target.exists() {
            return Err(VaultError::AlreadyExists(target));
        }

        fs::rename(&source, &target)?;
        self.notify();
        Ok(target)
    }
}
