use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

impl GitHubAuth {
  /// Value of the `Authorization` header for this token
  pub(crate) fn header_value(&self) -> String {
    format!("token {}", self.token)
  }
}

/// The subset of the repository metadata response grs reads
#[derive(Debug, Deserialize)]
pub(crate) struct GitHubRepository {
  pub size: Option<u64>,
  pub clone_url: Option<String>,
}

/// Stored size and clone URL of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySize {
  /// Size in kilobytes, as reported by GitHub
  pub size_kb: u64,
  pub clone_url: String,
}
