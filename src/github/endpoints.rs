// src/github/endpoints.rs
// =============================================================================
// This module builds GitHub API URLs.
//
// Two endpoints matter to us:
//   GET {base}/users/{username}/events
//   GET {base}/repos/{owner}/{repo}/compare/{before}...{head}
//
// The `url` crate does the path building, so usernames or refs with odd
// characters get percent-encoded instead of producing a broken URL.
//
// It also owns repository-name validation: event records name their repo
// as "owner/repo", and the compare endpoint needs the two halves.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use thiserror::Error;
use url::Url;

/// An "owner/name" repository identifier split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoName {
    pub owner: String,
    pub name: String,
}

/// Returned when a repository identifier is not exactly "owner/name"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("repository name {0:?} is not in owner/name form")]
pub struct RepoNameError(pub String);

// Splits "owner/name" into its two parts
//
// Exactly one '/' and two non-empty halves, nothing else:
//   "rust-lang/rust" -> Ok
//   "noSlash"        -> Err
//   "a/b/c"          -> Err
//   "/rust"          -> Err
pub fn split_repo_name(id: &str) -> Result<RepoName, RepoNameError> {
    let mut parts = id.split('/');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(RepoName {
            owner: owner.to_string(),
            name: name.to_string(),
        }),
        _ => Err(RepoNameError(id.to_string())),
    }
}

/// URL builder rooted at the API base (https://api.github.com by default)
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parses and validates the API base URL
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("Invalid API URL '{}'", base))?;

        // mailto:, data: and friends have no path we could append to
        if base.cannot_be_a_base() {
            return Err(anyhow!("API URL '{}' cannot be used as a base", base));
        }

        Ok(Self { base })
    }

    /// Public events of `username`
    pub fn events_url(&self, username: &str) -> String {
        self.with_segments(&["users", username, "events"])
    }

    /// Comparison between two commits of `repo`
    pub fn compare_url(&self, repo: &RepoName, before: &str, head: &str) -> String {
        let range = format!("{}...{}", before, head);
        self.with_segments(&["repos", &repo.owner, &repo.name, "compare", &range])
    }

    // Appends path segments to the base, keeping any base path
    // (e.g. GitHub Enterprise's /api/v3)
    fn with_segments(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        // Never fails: new() rejected cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}
