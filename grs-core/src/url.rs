//! Repository URL parsing.
//!
//! Only HTTPS clone URLs of the form `https://github.com/<owner>/<name>.git`
//! are accepted. The parser is strict: anything else yields `None` rather
//! than a best-guess reference.

use std::fmt;

use crate::consts::{GIT_SUFFIX, GITHUB_URL_PREFIX};

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
  pub owner: String,
  pub name: String,
}

impl fmt::Display for RepositoryRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}

/// Extract the owner and repository name from a GitHub clone URL.
///
/// Segment 3 of the `/`-split URL is the owner and segment 4, minus `.git`,
/// is the name. Both must be non-empty.
pub fn parse_repo_url(url: &str) -> Option<RepositoryRef> {
  if !url.starts_with(GITHUB_URL_PREFIX) || !url.ends_with(GIT_SUFFIX) {
    return None;
  }

  let parts: Vec<&str> = url.split('/').collect();
  if parts.len() < 5 {
    return None;
  }

  let owner = parts[3];
  let name = parts[4].strip_suffix(GIT_SUFFIX)?;
  if owner.is_empty() || name.is_empty() {
    return None;
  }

  Some(RepositoryRef {
    owner: owner.to_string(),
    name: name.to_string(),
  })
}
