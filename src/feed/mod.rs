// src/feed/mod.rs
// =============================================================================
// This module turns GitHub events into readable lines.
//
// Submodules:
// - resolver: looks up how many commits a push contained (compare API)
// - format: one rendering rule per event type
// - driver: fetches a user's events and formats all of them, in order
//
// Data flow:
//   driver -> github::Fetch (events list) -> Event::from_value
//          -> format_event -> [push only] resolve_commit_count -> github::Fetch
// =============================================================================

mod driver;
mod format;
mod resolver;

pub use driver::{render_feed, Feed};
pub use format::RenderedLine;
