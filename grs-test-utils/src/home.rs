//! Temporary home directories for token file tests
//!
//! The guard never touches the real `HOME`; callers pass [`TokenHomeGuard::home_dir`]
//! or [`TokenHomeGuard::token_path`] explicitly, either to a store or to a child
//! process environment.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Name of the token file inside the temporary home directory
const TOKEN_FILE_NAME: &str = ".github_token";

/// RAII guard for a temporary home directory that may hold a token file
pub struct TokenHomeGuard {
  temp_dir: TempDir,
  token_path: PathBuf,
}

impl Default for TokenHomeGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl TokenHomeGuard {
  /// Create an empty home directory without a token file
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let token_path = temp_dir.path().join(TOKEN_FILE_NAME);

    Self { temp_dir, token_path }
  }

  /// Create a home directory whose token file holds `contents` verbatim
  pub fn with_token(contents: &str) -> Self {
    let guard = Self::new();
    fs::write(&guard.token_path, contents).expect("Failed to write test token file");
    guard
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to the token file (it may not exist)
  pub fn token_path(&self) -> &Path {
    &self.token_path
  }

  /// Read the raw token file, if present
  pub fn read_token(&self) -> Option<String> {
    fs::read_to_string(&self.token_path).ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_has_no_token_file() {
    let guard = TokenHomeGuard::new();
    assert!(!guard.token_path().exists());
    assert!(guard.read_token().is_none());
  }

  #[test]
  fn test_with_token_writes_contents_verbatim() {
    let guard = TokenHomeGuard::with_token("ghp_abc\n");
    assert_eq!(guard.read_token().as_deref(), Some("ghp_abc\n"));
    assert!(guard.token_path().starts_with(guard.home_dir()));
  }
}
