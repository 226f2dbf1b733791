// src/github/types.rs
// =============================================================================
// The data model for GitHub events.
//
// GitHub sends each event as JSON shaped roughly like:
//   { "type": "PushEvent", "repo": { "name": "owner/repo" }, "payload": { ... } }
//
// The payload's shape depends on "type". We decode in two steps:
// 1. `RawEvent`: a lenient serde struct; every field is optional
// 2. `Event`: our typed view. `Event::classify` picks the variant from the
//    type tag and pulls out just the payload fields we render, filling in
//    defaults for anything missing
//
// Event types we don't know become `EventKind::Unrecognized`, which the
// formatter skips.
//
// Rust concepts:
// - Enums with data: each variant carries only the fields it needs
// - serde attributes: renaming "type" (a Rust keyword) and defaulting fields
// =============================================================================

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Placeholder used when an event does not name its repository
pub const UNKNOWN_REPO: &str = "unknown/repo";

const DEFAULT_ACTION: &str = "updated";
const DEFAULT_COMMENT_ACTION: &str = "commented on";
const DEFAULT_REF_TYPE: &str = "item";
const UNKNOWN_ISSUE_NUMBER: &str = "?";

/// An event exactly as GitHub sent it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub repo: Option<RawRepo>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRepo {
    #[serde(default)]
    pub name: Option<String>,
}

/// The per-type part of an event, with defaults already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// New commits pushed to a branch. The refs bound the pushed range.
    Push {
        before: Option<String>,
        head: Option<String>,
    },
    Issues {
        action: String,
    },
    Watch,
    Fork,
    Create {
        ref_type: String,
    },
    PullRequest {
        action: String,
    },
    IssueComment {
        action: String,
        issue_number: String,
    },
    /// Any other type tag (or none at all)
    Unrecognized(Option<String>),
}

impl EventKind {
    /// The GitHub type tag this variant was classified from
    pub fn type_tag(&self) -> &str {
        match self {
            EventKind::Push { .. } => "PushEvent",
            EventKind::Issues { .. } => "IssuesEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Create { .. } => "CreateEvent",
            EventKind::PullRequest { .. } => "PullRequestEvent",
            EventKind::IssueComment { .. } => "IssueCommentEvent",
            EventKind::Unrecognized(tag) => tag.as_deref().unwrap_or(""),
        }
    }
}

/// One activity entry, ready to be formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// "owner/repo", or `UNKNOWN_REPO`
    pub repo: String,
    pub kind: EventKind,
}

impl Event {
    /// Classifies a raw event by its type tag
    pub fn classify(raw: &RawEvent) -> Event {
        let repo = raw
            .repo
            .as_ref()
            .and_then(|r| r.name.clone())
            .unwrap_or_else(|| UNKNOWN_REPO.to_string());

        let payload = &raw.payload;

        let kind = match raw.kind.as_deref() {
            Some("PushEvent") => EventKind::Push {
                before: str_field(payload, "before").map(str::to_string),
                head: str_field(payload, "head").map(str::to_string),
            },
            Some("IssuesEvent") => EventKind::Issues {
                action: str_field_or(payload, "action", DEFAULT_ACTION),
            },
            Some("WatchEvent") => EventKind::Watch,
            Some("ForkEvent") => EventKind::Fork,
            Some("CreateEvent") => EventKind::Create {
                ref_type: str_field_or(payload, "ref_type", DEFAULT_REF_TYPE),
            },
            Some("PullRequestEvent") => EventKind::PullRequest {
                action: str_field_or(payload, "action", DEFAULT_ACTION),
            },
            Some("IssueCommentEvent") => EventKind::IssueComment {
                action: str_field_or(payload, "action", DEFAULT_COMMENT_ACTION),
                issue_number: issue_number(payload),
            },
            other => EventKind::Unrecognized(other.map(str::to_string)),
        };

        Event { repo, kind }
    }

    /// Decodes and classifies one element of the events list
    ///
    /// A record we can't even decode (e.g. "type" is a number) is treated
    /// like an unknown event type rather than failing the whole feed.
    pub fn from_value(value: Value) -> Event {
        match serde_json::from_value::<RawEvent>(value) {
            Ok(raw) => Event::classify(&raw),
            Err(error) => {
                debug!(%error, "skipping undecodable event record");
                Event {
                    repo: UNKNOWN_REPO.to_string(),
                    kind: EventKind::Unrecognized(None),
                }
            }
        }
    }
}

// Reads payload[key] if it is a string
fn str_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

fn str_field_or(payload: &Value, key: &str, default: &str) -> String {
    str_field(payload, key).unwrap_or(default).to_string()
}

// payload.issue.number, as GitHub sends a number but we only ever print it
fn issue_number(payload: &Value) -> String {
    match payload.get("issue").and_then(|issue| issue.get("number")) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => UNKNOWN_ISSUE_NUMBER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(value: Value) -> Event {
        Event::from_value(value)
    }

    #[test]
    fn test_push_event() {
        let event = classify(json!({
            "type": "PushEvent",
            "repo": { "name": "acme/widgets" },
            "payload": { "before": "aaa", "head": "bbb", "size": 3 }
        }));
        assert_eq!(event.repo, "acme/widgets");
        assert_eq!(
            event.kind,
            EventKind::Push {
                before: Some("aaa".to_string()),
                head: Some("bbb".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_repo_uses_placeholder() {
        let event = classify(json!({ "type": "WatchEvent" }));
        assert_eq!(event.repo, UNKNOWN_REPO);
        assert_eq!(event.kind, EventKind::Watch);
    }

    #[test]
    fn test_payload_defaults() {
        let issues = classify(json!({ "type": "IssuesEvent", "payload": {} }));
        assert_eq!(issues.kind, EventKind::Issues { action: "updated".to_string() });

        let pr = classify(json!({ "type": "PullRequestEvent" }));
        assert_eq!(pr.kind, EventKind::PullRequest { action: "updated".to_string() });

        let create = classify(json!({ "type": "CreateEvent", "payload": {} }));
        assert_eq!(create.kind, EventKind::Create { ref_type: "item".to_string() });

        let comment = classify(json!({ "type": "IssueCommentEvent", "payload": {} }));
        assert_eq!(
            comment.kind,
            EventKind::IssueComment {
                action: "commented on".to_string(),
                issue_number: "?".to_string(),
            }
        );
    }

    #[test]
    fn test_issue_number_from_number_or_string() {
        let numeric = classify(json!({
            "type": "IssueCommentEvent",
            "payload": { "action": "created", "issue": { "number": 42 } }
        }));
        assert_eq!(
            numeric.kind,
            EventKind::IssueComment {
                action: "created".to_string(),
                issue_number: "42".to_string(),
            }
        );

        let text = classify(json!({
            "type": "IssueCommentEvent",
            "payload": { "issue": { "number": "7" } }
        }));
        assert!(matches!(text.kind, EventKind::IssueComment { ref issue_number, .. } if issue_number == "7"));
    }

    #[test]
    fn test_unknown_type() {
        let event = classify(json!({ "type": "GollumEvent", "repo": { "name": "acme/wiki" } }));
        assert_eq!(event.kind, EventKind::Unrecognized(Some("GollumEvent".to_string())));
        assert_eq!(event.kind.type_tag(), "GollumEvent");
    }

    #[test]
    fn test_type_tag_is_case_sensitive() {
        let event = classify(json!({ "type": "watchevent" }));
        assert!(matches!(event.kind, EventKind::Unrecognized(_)));
    }

    #[test]
    fn test_undecodable_record_is_unrecognized() {
        let event = classify(json!({ "type": 12, "repo": "acme/widgets" }));
        assert_eq!(event.kind, EventKind::Unrecognized(None));

        let event = classify(json!("not an object"));
        assert_eq!(event.kind, EventKind::Unrecognized(None));
    }
}
