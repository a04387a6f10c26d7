//! userfetch — fetch a page of users from the randomuser.me API.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userfetch::config;
use userfetch::env;
use userfetch::fetcher;
use userfetch::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;
use config::Config;
use env::Env;
use fetcher::UserFetcher;

#[tokio::main]
async fn main() {
    cli::init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.api.validate().context("invalid --base-url")?;

    let fetcher = UserFetcher::new(config.api).context("failed to set up HTTP client")?;

    let rendered = output::render_page(&fetcher, &cli.page_request(), cli.format)
        .await
        .with_context(|| format!("failed to fetch page {}", cli.page))?;
    print!("{rendered}");

    Ok(())
}
