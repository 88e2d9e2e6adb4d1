//! Vaultscope - browse and search Obsidian-style note vaults.
//!
//! # Overview
//!
//! Vaultscope provides a filtered, sorted view of a vault directory tree
//! and a cancellable whole-tree content search:
//! - Path filtering with glob ignore patterns and a hidden-file policy
//! - Lazy per-directory listing (directories first, case-insensitive order)
//! - Tree mutations (create, delete-to-trash, rename) with invalidation
//!   notifications
//! - Case-insensitive regex search with line context and progress reporting
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vaultscope::{CancelToken, SearchEngine, Vault, VaultConfig};
//!
//! let config = VaultConfig {
//!     root_path: "/path/to/vault".into(),
//!     ..Default::default()
//! };
//!
//! // List the vault root
//! let vault = Vault::new(config.clone());
//! for node in vault.list_children(Path::new("")).unwrap() {
//!     println!("{}", node.name);
//! }
//!
//! // Search the whole tree
//! let engine = SearchEngine::new(&config);
//! let matches = engine
//!     .search("TODO", &CancelToken::new(), |progress| {
//!         eprintln!("{}", progress.message);
//!     })
//!     .unwrap();
//! println!("{} matches", matches.len());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod glob;
pub mod search;
pub mod vault;

// Re-export main types at crate root
pub use config::VaultConfig;
pub use error::{Result, VaultError};
pub use filter::PathFilter;
pub use search::{CancelToken, SearchEngine, SearchMatch, SearchProgress};
pub use vault::{Node, NodeKind, SubscriptionId, Vault};
