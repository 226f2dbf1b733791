// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Everything the tool can be configured with lives here:
// - the GitHub username (positional)
// - where the API lives (--api-url, or the GITHUB_API_URL env var)
// - how long a single request may take (--timeout)
// - how many events we format at the same time (--concurrency)
// - output format (--json) and log verbosity (-v)
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Attributes: #[arg(...)] configures each flag
// =============================================================================

use clap::Parser;

/// Default GitHub REST API location
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version = "0.1.0",
    about = "Show the recent public activity of a GitHub user",
    long_about = "github-activity fetches a user's public events from the GitHub API and prints \
                  one readable line per event. Push events are enriched with the number of \
                  commits they contained."
)]
pub struct Cli {
    /// GitHub username to track (e.g., octocat)
    pub username: String,

    /// Base URL of the GitHub API
    ///
    /// Useful for GitHub Enterprise or for pointing at a local mock server.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// How many events may be formatted concurrently
    ///
    /// Only push events make extra requests, so this mostly controls how
    /// many compare lookups run in parallel. Output order never changes.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Output the feed as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v = info, -vv = debug)
    ///
    /// RUST_LOG takes precedence when it is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The tracing filter directive implied by the -v count
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "github_activity=warn",
            1 => "github_activity=info",
            _ => "github_activity=debug",
        }
    }
}
