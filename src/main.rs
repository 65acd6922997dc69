// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so the report on stdout stays clean)
// 3. Crawl from the start URL
// 4. Print the report
// 5. Exit with proper code (0 = crawl finished, 2 = error)
//
// A crawl "finishes" even when some pages fail: those are logged as
// warnings and skipped. Only bad input or a broken HTTP client is fatal.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use link_tally::crawl::crawl;
use link_tally::fetch::HttpFetcher;
use link_tally::report;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: could not set up logging: {}", e);
    }

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let start_url = cli.start_url()?;
    info!("Starting web crawler at {}", start_url);

    let fetcher = HttpFetcher::new(cli.fetch_config()).context("failed to build HTTP client")?;
    let outcome = crawl(&fetcher, &start_url, cli.crawl_options()).await?;

    let output = if cli.json {
        report::render_json(&outcome)?
    } else if cli.all {
        report::render_full(&outcome.counts)
    } else {
        report::render_top(&outcome.counts, cli.top)
    };
    print!("{}", output);

    Ok(())
}
