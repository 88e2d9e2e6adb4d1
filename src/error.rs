//! Error types and exit codes for Vaultscope.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const VAULT_NOT_CONFIGURED: i32 = 2;
    pub const VAULT_NOT_FOUND: i32 = 3;
    pub const ALREADY_EXISTS: i32 = 4;
    pub const INVALID_PATTERN: i32 = 5;
}

/// Main error type for Vaultscope operations.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Vault path is not configured")]
    VaultNotConfigured,

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VaultError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::VaultNotConfigured => exit_code::VAULT_NOT_CONFIGURED,
            VaultError::VaultNotFound(_) => exit_code::VAULT_NOT_FOUND,
            VaultError::AlreadyExists(_) => exit_code::ALREADY_EXISTS,
            VaultError::InvalidPattern(_) => exit_code::INVALID_PATTERN,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for Vaultscope operations.
pub type Result<T> = std::result::Result<T, VaultError>;
