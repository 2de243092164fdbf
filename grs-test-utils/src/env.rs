//! Environment variable management for testing
//!
//! Tests that read process-wide variables such as `HOME` or `GRS_TOKEN_PATH`
//! must run serially; the guard only takes care of restoring the previous
//! value.

use std::env;
use std::ffi::{OsStr, OsString};

/// Saves one environment variable on creation and restores it on drop
pub struct EnvVarGuard {
  key: &'static str,
  original: Option<OsString>,
}

impl EnvVarGuard {
  /// Capture the current value of `key`
  pub fn new(key: &'static str) -> Self {
    Self {
      key,
      original: env::var_os(key),
    }
  }

  /// Set the variable for the lifetime of the guard
  pub fn set(&self, value: impl AsRef<OsStr>) {
    unsafe {
      env::set_var(self.key, value);
    }
  }

  /// Remove the variable for the lifetime of the guard
  pub fn remove(&self) {
    unsafe {
      env::remove_var(self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(self.key, val);
      },
      None => unsafe {
        env::remove_var(self.key);
      },
    }
  }
}
