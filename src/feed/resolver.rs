// src/feed/resolver.rs
// =============================================================================
// Resolves the number of commits in a push.
//
// Push events only carry the commit before and after the push, so we ask
// the compare endpoint for the commits in between and count them.
//
// This lookup is "nice to have": when anything goes wrong (bad repo name,
// missing ref, network error, odd response) we return None and the caller
// prints the shorter "Pushed to {repo}" line instead.
// =============================================================================

use crate::github::{split_repo_name, Endpoints, Fetch};
use serde_json::Value;
use tracing::debug;

/// Number of commits between `before` and `head` in `repo`, or `None` if unknown
///
/// No request is made when the repository name is not "owner/name" or a
/// ref is missing.
pub async fn resolve_commit_count(
    fetcher: &dyn Fetch,
    endpoints: &Endpoints,
    repo: &str,
    before: Option<&str>,
    head: Option<&str>,
) -> Option<usize> {
    let repo_name = match split_repo_name(repo) {
        Ok(repo_name) => repo_name,
        Err(error) => {
            debug!(%error, "not looking up commit count");
            return None;
        }
    };

    let (Some(before), Some(head)) = (before, head) else {
        debug!(repo, "push event is missing a commit ref");
        return None;
    };

    let url = endpoints.compare_url(&repo_name, before, head);
    let comparison = fetcher.fetch(&url).await?;

    match comparison.get("commits").and_then(Value::as_array) {
        Some(commits) => Some(commits.len()),
        None => {
            debug!(%url, "compare response has no commit list");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::MockFetcher;
    use crate::github::FetchError;
    use serde_json::json;

    const COMPARE_URL: &str = "https://api.github.com/repos/acme/widgets/compare/aaa...bbb";

    fn endpoints() -> Endpoints {
        Endpoints::new("https://api.github.com").unwrap()
    }

    #[tokio::test]
    async fn test_counts_commits() {
        let mock = MockFetcher::new().respond(
            COMPARE_URL,
            json!({ "commits": [{ "sha": "1" }, { "sha": "2" }, { "sha": "3" }] }),
        );

        let count =
            resolve_commit_count(&mock, &endpoints(), "acme/widgets", Some("aaa"), Some("bbb"))
                .await;
        assert_eq!(count, Some(3));
        assert_eq!(mock.requests(), vec![COMPARE_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_empty_commit_list_is_zero() {
        let mock = MockFetcher::new().respond(COMPARE_URL, json!({ "commits": [] }));
        let count =
            resolve_commit_count(&mock, &endpoints(), "acme/widgets", Some("aaa"), Some("bbb"))
                .await;
        assert_eq!(count, Some(0));
    }

    #[tokio::test]
    async fn test_malformed_repo_name_makes_no_request() {
        let mock = MockFetcher::new();
        for repo in ["noSlash", "a/b/c"] {
            let count =
                resolve_commit_count(&mock, &endpoints(), repo, Some("aaa"), Some("bbb")).await;
            assert_eq!(count, None);
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_ref_makes_no_request() {
        let mock = MockFetcher::new();
        let count = resolve_commit_count(&mock, &endpoints(), "acme/widgets", None, Some("bbb")).await;
        assert_eq!(count, None);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_unknown() {
        let mock = MockFetcher::new().fail(COMPARE_URL, FetchError::Status(404));
        let count =
            resolve_commit_count(&mock, &endpoints(), "acme/widgets", Some("aaa"), Some("bbb"))
                .await;
        assert_eq!(count, None);
    }

    #[tokio::test]
    async fn test_missing_commit_list_is_unknown() {
        let mock = MockFetcher::new()
            .respond(COMPARE_URL, json!({ "status": "ahead", "ahead_by": 3 }));
        let count =
            resolve_commit_count(&mock, &endpoints(), "acme/widgets", Some("aaa"), Some("bbb"))
                .await;
        assert_eq!(count, None);
    }
}
