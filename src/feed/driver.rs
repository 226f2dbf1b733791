// src/feed/driver.rs
// =============================================================================
// Fetches a user's public events and formats every one of them.
//
// Each push event costs an extra request (the compare lookup), so events
// are formatted several at a time. `buffered` (not `buffer_unordered`)
// hands results back in input order, so the feed reads the same as the
// events list no matter which lookup finishes first.
// =============================================================================

use super::format::{format_event, RenderedLine};
use crate::github::{Endpoints, Event, Fetch};
use futures::future;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{info, warn};

/// The raw events list for `username`
///
/// A failed request and a response that isn't a JSON array both give an
/// empty list; the caller can't (and doesn't need to) tell them apart.
pub async fn fetch_events(fetcher: &dyn Fetch, endpoints: &Endpoints, username: &str) -> Vec<Value> {
    let url = endpoints.events_url(username);

    match fetcher.fetch(&url).await {
        Some(Value::Array(events)) => events,
        Some(_) => {
            warn!(username, "events response is not a list");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// A user's formatted feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// How many events the API returned, including ones we don't render
    pub event_count: usize,
    /// One line per supported event, in event order
    pub lines: Vec<RenderedLine>,
}

impl Feed {
    /// True when the API gave us nothing at all (empty list or failed fetch)
    ///
    /// A feed made only of unsupported event types is not empty; it just
    /// has no lines.
    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }
}

/// Fetches and formats the feed for `username`, in event order
///
/// At most `concurrency` events are formatted at once. Unsupported event
/// types are left out of `lines` but still counted in `event_count`.
pub async fn render_feed(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    username: &str,
    concurrency: usize,
) -> Feed {
    let events = fetch_events(fetcher, endpoints, username).await;
    let event_count = events.len();
    info!(username, count = event_count, "fetched events");

    let lines = stream::iter(events.into_iter().map(Event::from_value))
        .map(move |event| async move { format_event(&event, fetcher, endpoints).await })
        .buffered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await;

    Feed { event_count, lines }
}
