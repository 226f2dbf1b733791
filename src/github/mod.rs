// src/github/mod.rs
// =============================================================================
// This module is everything that talks to (or knows the shape of) the
// GitHub REST API.
//
// Submodules:
// - fetch: the HTTP layer. Turns a URL into parsed JSON or a FetchError
// - endpoints: builds API URLs and validates "owner/name" repository names
// - types: the event records GitHub sends us, and our typed view of them
//
// Nothing in here knows how an event is rendered; that lives in feed/.
// =============================================================================

mod endpoints;
mod fetch;
mod types;

#[cfg(test)]
pub mod mock;

// Re-export the public API so callers can write `github::Endpoints`
pub use endpoints::{split_repo_name, Endpoints};
pub use fetch::{Fetch, HttpFetcher};
#[cfg(test)]
pub use fetch::FetchError;
pub use types::{Event, EventKind};
