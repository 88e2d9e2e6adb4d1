//! List command implementation.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::vault::{Node, Vault};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub nodes: Vec<Node>,
    pub total: usize,
}

pub fn run(vault: &Vault, args: &ListArgs, output: &Output) -> Result<()> {
    let nodes = vault.list_children(&args.dir)?;

    let response = ListResponse {
        total: nodes.len(),
        nodes,
    };
    output.print(&response)
}
