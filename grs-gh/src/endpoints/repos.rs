use reqwest::{StatusCode, header};
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::consts;
use crate::error::FetchError;
use crate::models::{GitHubRepository, RepositorySize};

impl GitHubClient {
  /// Fetch the stored size and clone URL of `owner/repo`.
  ///
  /// Exactly one request is made; failures are classified but never retried.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository_size(&self, owner: &str, repo: &str) -> Result<RepositorySize, FetchError> {
    let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);

    let response = self
      .client
      .get(&url)
      .header(header::ACCEPT, consts::ACCEPT)
      .header(header::USER_AGENT, consts::USER_AGENT)
      .header(header::AUTHORIZATION, self.auth.header_value())
      .send()
      .await
      .map_err(FetchError::Transport)?;

    let status = response.status();
    debug!(%status, "Received repository response");

    let body = response.text().await.map_err(FetchError::Transport)?;

    match status {
      s if s.is_success() => parse_repository_size(&body),
      StatusCode::NOT_FOUND => Err(FetchError::NotFound),
      StatusCode::UNAUTHORIZED => Err(FetchError::Unauthorized),
      _ => Err(FetchError::Http {
        status,
        message: error_message(&body),
      }),
    }
  }
}

/// Parse a successful repository response.
///
/// A missing or null `size` counts as 0; a missing `clone_url` is an error.
pub(crate) fn parse_repository_size(body: &str) -> Result<RepositorySize, FetchError> {
  let repository = serde_json::from_str::<GitHubRepository>(body)
    .map_err(|e| FetchError::MalformedResponse(format!("invalid repository JSON: {e}")))?;

  let clone_url = repository
    .clone_url
    .ok_or_else(|| FetchError::MalformedResponse("missing 'clone_url' field".to_string()))?;

  Ok(RepositorySize {
    size_kb: repository.size.unwrap_or(0),
    clone_url,
  })
}

/// Prefer GitHub's `message` field; fall back to the raw body.
fn error_message(body: &str) -> String {
  if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(body)
    && let Some(message) = error_json.get("message").and_then(|m| m.as_str())
  {
    return message.to_string();
  }

  let body = body.trim();
  if body.is_empty() {
    "no details provided".to_string()
  } else {
    body.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_repository_size() {
    let body = r#"{"full_name":"alice/proj","size":2048,"clone_url":"https://github.com/alice/proj.git"}"#;

    let result = parse_repository_size(body).unwrap();
    assert_eq!(result.size_kb, 2048);
    assert_eq!(result.clone_url, "https://github.com/alice/proj.git");
  }

  #[test]
  fn test_parse_repository_size_defaults_size() {
    let missing = parse_repository_size(r#"{"clone_url":"https://github.com/a/b.git"}"#).unwrap();
    assert_eq!(missing.size_kb, 0);

    let null = parse_repository_size(r#"{"size":null,"clone_url":"https://github.com/a/b.git"}"#).unwrap();
    assert_eq!(null.size_kb, 0);
  }

  #[test]
  fn test_parse_repository_size_missing_clone_url() {
    let error = parse_repository_size(r#"{"size":10}"#).unwrap_err();
    assert!(matches!(error, FetchError::MalformedResponse(_)));
    assert!(error.to_string().contains("clone_url"));
  }

  #[test]
  fn test_parse_repository_size_not_json() {
    let error = parse_repository_size("<html>oops</html>").unwrap_err();
    assert!(matches!(error, FetchError::MalformedResponse(_)));
  }

  #[test]
  fn test_error_message_prefers_github_message() {
    assert_eq!(error_message(r#"{"message":"API rate limit exceeded"}"#), "API rate limit exceeded");
    assert_eq!(error_message("Service Unavailable"), "Service Unavailable");
    assert_eq!(error_message("  "), "no details provided");
  }
}
