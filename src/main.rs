#![deny(clippy::pedantic)]

use clap::Parser;
use color_eyre::eyre::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::collection_api::CollectionApi;
use crate::report::Outcome;

mod cli;
mod collection_api;
mod error;
mod report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let api = CollectionApi::new(reqwest::Client::new(), args.base_url.clone());
    let outcome = report::run(&api, &args.search_query(), &mut std::io::stdout().lock())
        .await
        .context("Failed to report on the first search result")?;
    match outcome {
        Outcome::Reported { object_id } => tracing::debug!(object_id, "reported"),
        Outcome::DetailsUnavailable { object_id } => {
            tracing::info!(object_id, "search succeeded, details unavailable");
        }
        Outcome::NoResults => tracing::info!(query = %args.query, "nothing to report"),
    }
    Ok(())
}
