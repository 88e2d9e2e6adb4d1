//! Create and mkdir command implementations.

use crate::cli::args::{CreateArgs, MkdirArgs};
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub path: String,
    pub message: String,
}

pub fn create_file(vault: &Vault, args: &CreateArgs, output: &Output) -> Result<()> {
    let path = vault.create_file(&args.dir, &args.name)?;

    let response = CreateResponse {
        path: path.to_string_lossy().to_string(),
        message: "File created".to_string(),
    };
    output.print(&response)
}

pub fn create_folder(vault: &Vault, args: &MkdirArgs, output: &Output) -> Result<()> {
    let path = vault.create_folder(&args.dir, &args.name)?;

    let response = CreateResponse {
        path: path.to_string_lossy().to_string(),
        message: "Folder created".to_string(),
    };
    output.print(&response)
}
