// src/github/fetch.rs
// =============================================================================
// This module fetches JSON documents from the GitHub API.
//
// Two layers:
// - `Fetch::fetch_json` reports *why* a request failed (timeout, bad status,
//   broken connection, body that isn't JSON) as a FetchError
// - `Fetch::fetch` is what the rest of the app calls. It logs the cause and
//   collapses every failure into `None`, so a bad response can never crash
//   the feed
//
// The trait exists so tests can replace the network with canned responses
// (see github/mock.rs).
//
// Rust concepts:
// - Traits: a shared interface with a default method
// - async-trait: async functions inside traits
// - thiserror: deriving std::error::Error for our own enum
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a request to the API did not produce a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,
    /// The server answered, but not with 2xx (404 for unknown users, 403 when rate limited, ...)
    #[error("HTTP {0}")]
    Status(u16),
    /// Connection refused, DNS failure, TLS problems, ...
    #[error("transport error: {0}")]
    Transport(String),
    /// The body could not be parsed as JSON
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

// Sorts reqwest errors into our categories
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

/// Something that can turn a URL into parsed JSON
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches `url` and parses the body as JSON, keeping the failure cause
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;

    /// Fetches `url`, returning `None` on any failure
    ///
    /// The cause is logged, never returned. Callers only need to know
    /// whether data is available.
    async fn fetch(&self, url: &str) -> Option<Value> {
        match self.fetch_json(url).await {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(url, %error, "request failed");
                None
            }
        }
    }
}

/// The real HTTP implementation, backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the given per-request timeout
    ///
    /// GitHub rejects requests without a User-Agent, so we always send one.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("github-activity/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Read the body as text first so a parse failure is reported as
        // Decode rather than whatever reqwest would call it
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The formatter only needs "give me JSON for this URL"
//    - Tests implement the same trait with a HashMap of canned answers
//    - &dyn Fetch lets both be passed to the same functions
//
// 2. What does #[async_trait] do?
//    - It rewrites `async fn` in the trait into functions returning a boxed
//      future, which lets the trait be used as `dyn Fetch`
//
// 3. Why both fetch_json and fetch?
//    - fetch_json keeps the reason (timeout vs 404 vs bad JSON) for logging
//    - fetch is what the feed uses: it only cares whether data is there
// -----------------------------------------------------------------------------
