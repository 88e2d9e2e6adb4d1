//! CLI argument definitions using clap.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Path parser that, unlike clap's default `PathBuf` parser, accepts the
/// empty string (used to mean "vault root" / "unconfigured").
fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

#[derive(Parser, Debug)]
#[command(name = "vaultscope")]
#[command(author, version, about = "Browse and search an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to the vault root (overrides the configured default)
    #[arg(long, global = true, value_parser = path_parser())]
    pub vault: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the children of a vault directory
    List(ListArgs),

    /// Search file contents for a regular expression
    Search(SearchArgs),

    /// Create an empty note file
    Create(CreateArgs),

    /// Create a folder
    Mkdir(MkdirArgs),

    /// Delete a file or folder
    Delete(DeleteArgs),

    /// Rename a file or folder in place
    Rename(RenameArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Vault-relative directory to list (defaults to the vault root)
    #[arg(default_value = "", value_parser = path_parser())]
    pub dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term, treated as a case-insensitive regular expression
    pub term: String,

    /// Maximum number of matches to print
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// File name; `.md` is appended when no extension is given
    pub name: String,

    /// Vault-relative directory to create the file in
    #[arg(long, default_value = "", value_parser = path_parser())]
    pub dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,

    /// Vault-relative directory to create the folder in
    #[arg(long, default_value = "", value_parser = path_parser())]
    pub dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Vault-relative path to delete (recursively for folders)
    pub path: PathBuf,

    /// Skip the platform trash and remove permanently
    #[arg(long)]
    pub permanent: bool,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Vault-relative path to rename
    pub path: PathBuf,

    /// New name (stays in the same directory)
    pub new_name: String,
}
