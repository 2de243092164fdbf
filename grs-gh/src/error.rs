//! Errors produced while fetching repository metadata.

pub use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes of a repository lookup
#[derive(Debug, Error)]
pub enum FetchError {
  /// GitHub answered 404
  #[error("Repository not found.")]
  NotFound,

  /// GitHub answered 401
  #[error("Invalid or expired token.")]
  Unauthorized,

  /// Any other non-success status
  #[error("HTTP Error: {status} - {message}")]
  Http { status: StatusCode, message: String },

  /// The request never produced a complete response (DNS, connect, timeout, ...)
  #[error("Error fetching repository details: {0}")]
  Transport(#[source] reqwest::Error),

  /// A success response whose body lacks what grs needs
  #[error("Malformed response from GitHub: {0}")]
  MalformedResponse(String),
}
