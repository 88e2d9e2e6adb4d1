//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub path: String,
    pub message: String,
}

pub fn run(vault: &Vault, args: &DeleteArgs, output: &Output) -> Result<()> {
    vault.delete_item(&args.path, !args.permanent)?;

    let response = DeleteResponse {
        path: args.path.to_string_lossy().to_string(),
        message: if args.permanent {
            "Item deleted permanently".to_string()
        } else {
            "Item deleted".to_string()
        },
    };
    output.print(&response)
}
