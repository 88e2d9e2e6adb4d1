//! Rename command implementation.

use crate::cli::args::RenameArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RenameResponse {
    pub from: String,
    pub to: String,
    pub message: String,
}

pub fn run(vault: &Vault, args: &RenameArgs, output: &Output) -> Result<()> {
    let renamed = vault.rename_item(&args.path, &args.new_name)?;

    let response = RenameResponse {
        from: args.path.to_string_lossy().to_string(),
        to: renamed.to_string_lossy().to_string(),
        message: "Item renamed".to_string(),
    };
    output.print(&response)
}
