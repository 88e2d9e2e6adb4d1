//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::config::VaultConfig;
use crate::error::Result;
use crate::search::{CancelToken, SearchEngine, SearchMatch};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<SearchMatch>,
    pub total: usize,
    pub query: String,
}

pub fn run(config: &VaultConfig, args: &SearchArgs, output: &Output) -> Result<()> {
    let engine = SearchEngine::new(config);
    let cancel = CancelToken::new();

    let results = engine.search(&args.term, &cancel, |progress| {
        output.info(&progress.message);
    })?;

    let total = results.len();
    let matches: Vec<SearchMatch> = match args.limit {
        Some(limit) => results.into_iter().take(limit).collect(),
        None => results,
    };

    let response = SearchResponse {
        matches,
        total,
        query: args.term.clone(),
    };
    output.print(&response)
}
