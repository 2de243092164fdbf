//! # Configuration
//!
//! Resolves the locations grs reads from: the per-user token file and the
//! GitHub API base URL. There is no configuration file; the defaults can only
//! be overridden through environment variables.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::debug;

use crate::consts::{ENV_API_URL, ENV_TOKEN_PATH, TOKEN_FILE_NAME};

/// Resolve the token file path from the environment.
///
/// `$GRS_TOKEN_PATH` wins when set and non-empty, otherwise the file lives at
/// `~/.github_token`.
pub fn token_path() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new();
  resolve_token_path(
    std::env::var_os(ENV_TOKEN_PATH),
    base_dirs.as_ref().map(|dirs| dirs.home_dir()),
  )
}

/// Pick the token file path from an optional override and the home directory.
pub fn resolve_token_path(override_path: Option<OsString>, home: Option<&Path>) -> Result<PathBuf> {
  if let Some(path) = override_path.filter(|p| !p.is_empty()) {
    debug!("Using token path from {}", ENV_TOKEN_PATH);
    return Ok(PathBuf::from(path));
  }

  let home = home.context("Could not determine the home directory")?;
  Ok(home.join(TOKEN_FILE_NAME))
}

/// API base URL override from `$GRS_API_URL`, without a trailing slash.
pub fn api_base_url_override() -> Option<String> {
  std::env::var(ENV_API_URL)
    .ok()
    .map(|url| url.trim().trim_end_matches('/').to_string())
    .filter(|url| !url.is_empty())
}
