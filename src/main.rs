// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only ever holds the feed)
// 3. Fetch and format the user's events
// 4. Print them as text or JSON
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: Push events need extra network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod feed; // src/feed/ - event formatting
mod github; // src/github/ - GitHub API access and event types

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use github::{Endpoints, HttpFetcher};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

/// Printed when the user has no (visible) public events
const NO_EVENTS: &str = "No events found.";

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr. RUST_LOG wins over -v when set.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = feed printed (possibly "No events found.")
//   Err   = bad configuration, reported by main() with exit code 2
async fn run(cli: Cli) -> Result<i32> {
    let endpoints = Endpoints::new(&cli.api_url)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))
        .context("Failed to create HTTP client")?;

    tracing::info!(username = %cli.username, api = %cli.api_url, "fetching activity");

    let feed = feed::render_feed(
        &fetcher,
        &endpoints,
        &cli.username,
        usize::from(cli.concurrency),
    )
    .await;

    let output = render_output(&feed, cli.json)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(0)
}

// Builds everything we print to stdout
//
// Text mode: one "- {line}" per supported event. "No events found." only
// when the API returned no events at all; a feed of unsupported events
// prints nothing.
// JSON mode: a pretty-printed array (empty array when there are no lines)
fn render_output(feed: &feed::Feed, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&feed.lines)?);
    }

    if feed.is_empty() {
        return Ok(NO_EVENTS.to_string());
    }

    let text = feed
        .lines
        .iter()
        .map(|rendered| format!("- {}", rendered.line))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text)
}
