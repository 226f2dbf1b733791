// src/feed/format.rs
// =============================================================================
// This module renders a single event as a line of text.
//
// One rule per event type:
//   PushEvent          "Pushed {N} commits to {repo}"  (or "Pushed to {repo}")
//   IssuesEvent        "{Action} an issue in {repo}"
//   WatchEvent         "Starred {repo}"
//   ForkEvent          "Forked {repo}"
//   CreateEvent        "Created a new {ref_type} in {repo}"
//   PullRequestEvent   "{Action} a pull request in {repo}"
//   IssueCommentEvent  "{Action} a comment on issue #{number} in {repo}"
//
// Any other type renders nothing.
//
// Push is the only rule that does I/O: it asks the resolver for a commit
// count first.
// =============================================================================

use super::resolver::resolve_commit_count;
use crate::github::{Endpoints, Event, EventKind, Fetch};
use serde::Serialize;
use tracing::debug;

/// A formatted event
///
/// Serialized as-is for --json output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    /// GitHub type tag, e.g. "PushEvent"
    pub event_type: String,
    pub repo: String,
    /// The human readable summary
    pub line: String,
}

/// Renders `event`, or returns `None` for event types we don't summarize
pub async fn format_event(
    event: &Event,
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
) -> Option<RenderedLine> {
    let repo = &event.repo;

    let line = match &event.kind {
        EventKind::Push { before, head } => {
            let count = resolve_commit_count(
                fetcher,
                endpoints,
                repo,
                before.as_deref(),
                head.as_deref(),
            )
            .await;

            match count {
                Some(count) => format!("Pushed {} commits to {}", count, repo),
                None => format!("Pushed to {}", repo),
            }
        }
        EventKind::Issues { action } => {
            format!("{} an issue in {}", capitalize(action), repo)
        }
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::Create { ref_type } => format!("Created a new {} in {}", ref_type, repo),
        EventKind::PullRequest { action } => {
            format!("{} a pull request in {}", capitalize(action), repo)
        }
        EventKind::IssueComment {
            action,
            issue_number,
        } => format!(
            "{} a comment on issue #{} in {}",
            capitalize(action),
            issue_number,
            repo
        ),
        EventKind::Unrecognized(tag) => {
            debug!(event_type = ?tag, repo = %repo, "skipping unsupported event type");
            return None;
        }
    };

    Some(RenderedLine {
        event_type: event.kind.type_tag().to_string(),
        repo: repo.clone(),
        line,
    })
}

/// Upper-cases the first character and leaves the rest alone
///
/// "opened" -> "Opened", "commented on" -> "Commented on", "reOpened" -> "ReOpened"
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does format_event return Option?
//    - None means "this event type isn't shown", which is not an error
//    - The driver drops the Nones with filter_map
//
// 2. Why is capitalize not str::to_uppercase on the whole word?
//    - Only the first letter changes: "reOpened" stays "ReOpened"
//    - char::to_uppercase can yield more than one char ('ß' -> "SS"),
//      which is why we chain iterators instead of indexing
// -----------------------------------------------------------------------------
