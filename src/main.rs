// Listing scraper CLI
//
// Opens the listing page, searches a delivery location, loads every card by
// scrolling, and writes one row per restaurant.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kodegen_tools_listingscrape::cli::Args;
use kodegen_tools_listingscrape::{run, run_offline};

const DEFAULT_LOG_FILTER: &str = "info,chromiumoxide::handler=off,chromiumoxide::conn=off";

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let from_html = args.from_html.clone();
    let config = args.into_config()?;

    let summary = match from_html {
        Some(path) => run_offline(&path, &config).await?,
        None => run(&config).await?,
    };

    println!("Data saved to {}", summary.output_path.display());
    println!(
        "{} records from {} cards ({} skipped{})",
        summary.records_written,
        summary.cards_found,
        summary.skipped.len(),
        if summary.aborted { ", stopped early" } else { "" }
    );
    Ok(())
}
