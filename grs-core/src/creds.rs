//! # Credential Management
//!
//! Storage and retrieval of the GitHub API token. The token is kept in
//! plaintext as the entire contents of a single file; there is no structured
//! encoding and no expiry tracking.
//!
//! Consumers depend on the [`TokenStore`] trait so that tests can swap the
//! file-backed store for [`MemoryTokenStore`].

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::config;

/// Load/save capability for the single persisted API token
pub trait TokenStore {
  /// Return the stored token with surrounding whitespace removed.
  ///
  /// A missing or blank token is `Ok(None)`, not an error.
  fn load(&self) -> Result<Option<String>>;

  /// Overwrite the stored token.
  fn save(&self, token: &str) -> Result<()>;

  /// Human-readable location of the token, used in confirmation messages.
  fn location(&self) -> String;
}

/// Token store backed by a plain file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
  path: PathBuf,
}

impl FileTokenStore {
  /// Create a store for the given file path
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Create a store at the default per-user location
  pub fn from_env() -> Result<Self> {
    Ok(Self::new(config::token_path()?))
  }

  /// Path of the token file
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl TokenStore for FileTokenStore {
  #[instrument(skip(self), fields(path = %self.path.display()), level = "debug")]
  fn load(&self) -> Result<Option<String>> {
    let contents = match fs::read_to_string(&self.path) {
      Ok(contents) => contents,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!("No token file found");
        return Ok(None);
      }
      Err(e) => {
        return Err(e).with_context(|| format!("Failed to read token file {}", self.path.display()));
      }
    };

    let token = contents.trim();
    if token.is_empty() {
      debug!("Token file is blank");
      Ok(None)
    } else {
      Ok(Some(token.to_string()))
    }
  }

  #[instrument(skip(self, token), fields(path = %self.path.display()), level = "debug")]
  fn save(&self, token: &str) -> Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&self.path, token).with_context(|| format!("Failed to write token file {}", self.path.display()))?;
    debug!("Token written");

    Ok(())
  }

  fn location(&self) -> String {
    self.path.display().to_string()
  }
}

/// In-memory token store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
  token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
  /// Create an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a store already holding `token`
  pub fn with_token(token: &str) -> Self {
    Self {
      token: RefCell::new(Some(token.to_string())),
    }
  }
}

impl TokenStore for MemoryTokenStore {
  fn load(&self) -> Result<Option<String>> {
    let token = self.token.borrow();
    Ok(token.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string))
  }

  fn save(&self, token: &str) -> Result<()> {
    *self.token.borrow_mut() = Some(token.to_string());
    Ok(())
  }

  fn location(&self) -> String {
    "memory".to_string()
  }
}
