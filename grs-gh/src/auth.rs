//! Authentication helpers for the GitHub client.
//!
//! Builds ready-to-use clients from a loaded token so the CLI does not have
//! to know where the API root comes from.

use anyhow::{Context, Result};
use grs_core::config::api_base_url_override;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{GitHubClient, create_github_client};

/// Creates an authenticated GitHub client for `token`.
///
/// `$GRS_API_URL`, when set, replaces the default API root.
pub fn create_github_client_from_token(token: &str) -> GitHubClient {
  let client = create_github_client(token);
  match api_base_url_override() {
    Some(base_url) => {
      debug!(%base_url, "Using overridden GitHub API URL");
      client.with_base_url(base_url)
    }
    None => client,
  }
}

/// Creates a tokio runtime and an authenticated GitHub client.
///
/// The CLI is synchronous; the runtime only drives the single API request.
pub fn create_github_runtime_and_client(token: &str) -> Result<(Runtime, GitHubClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_github_client_from_token(token);
  Ok((rt, client))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_create_client_from_token() {
    let client = create_github_client_from_token("gh-token");
    assert_eq!(client.auth.token, "gh-token");
  }

  #[test]
  fn test_create_runtime_and_client() {
    let (rt, client) = create_github_runtime_and_client("gh-token").unwrap();
    assert_eq!(client.auth.token, "gh-token");

    // The runtime is usable for blocking on futures.
    assert_eq!(rt.block_on(async { 1 + 1 }), 2);
  }
}
