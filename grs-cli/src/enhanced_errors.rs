//! Error handling for grs CLI commands
//!
//! Every failure the CLI can hit ends up as a [`CliError`]: a user-facing
//! message, optional details, and suggested fixes. The category decides the
//! process exit code.

use std::fmt;

use grs_core::output::{format_command, print_error, print_info};
use grs_gh::FetchError;
use tracing::debug;

use crate::clone::ProcessError;
use crate::consts::SET_TOKEN_USAGE;

/// Standardized error categories for consistent handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
  /// Missing or unreadable token
  Configuration,
  /// Bad command-line input or prompt answer
  UserInput,
  /// GitHub answered with a failure status or an unusable body
  Remote,
  /// The request never got a response
  Network,
  /// Token file could not be written
  FileSystem,
  /// External command execution errors
  ExternalCommand,
}

impl ErrorCategory {
  /// Exit code used when an error of this category ends the process
  pub fn exit_code(self) -> u8 {
    match self {
      ErrorCategory::Configuration | ErrorCategory::UserInput => 2,
      ErrorCategory::Remote | ErrorCategory::Network | ErrorCategory::FileSystem | ErrorCategory::ExternalCommand => 1,
    }
  }
}

/// Error information with context and suggestions
#[derive(Debug, Clone)]
pub struct CliError {
  /// The error category
  pub category: ErrorCategory,
  /// Primary error message
  pub message: String,
  /// Detailed description for debug purposes
  pub details: Option<String>,
  /// Suggested actions to resolve the error
  pub suggestions: Vec<String>,
}

impl fmt::Display for CliError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for CliError {}

impl CliError {
  /// Create a new CliError
  pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
    Self {
      category,
      message: message.into(),
      details: None,
      suggestions: Vec::new(),
    }
  }

  /// Add detailed context information
  pub fn with_details(mut self, details: impl Into<String>) -> Self {
    self.details = Some(details.into());
    self
  }

  /// Add a suggested action to resolve the error
  pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
    self.suggestions.push(suggestion.into());
    self
  }

  /// Exit code for this error
  pub fn exit_code(&self) -> u8 {
    self.category.exit_code()
  }

  /// Print the error with its details and suggestions
  pub fn display(&self) {
    debug!(category = ?self.category, message = %self.message, "Command failed");

    print_error(&self.message);

    if let Some(details) = &self.details {
      debug!("Error details: {}", details);
      print_info(&format!("Details: {details}"));
    }

    for suggestion in &self.suggestions {
      print_info(suggestion);
    }
  }

  /// No token is stored
  pub fn missing_token() -> Self {
    CliError::new(
      ErrorCategory::Configuration,
      format!("GitHub API token is not set. Please set the token first using '{SET_TOKEN_USAGE}'."),
    )
  }

  /// The token file exists but could not be read
  pub fn unreadable_token(error: anyhow::Error) -> Self {
    CliError::new(ErrorCategory::Configuration, "Could not read the GitHub API token.")
      .with_details(format!("{error:#}"))
      .with_suggestion(format!("Store a new token with {}.", format_command(&format!("grs {SET_TOKEN_USAGE}"))))
  }

  /// The token could not be written
  pub fn token_not_saved(error: anyhow::Error) -> Self {
    CliError::new(ErrorCategory::FileSystem, "Failed to save the GitHub API token.").with_details(format!("{error:#}"))
  }

  /// An empty token was entered interactively
  pub fn empty_token() -> Self {
    CliError::new(ErrorCategory::UserInput, "Token cannot be empty. The stored token was left unchanged.")
  }

  /// The URL does not have the accepted shape
  pub fn invalid_url(url: &str) -> Self {
    CliError::new(ErrorCategory::UserInput, "Invalid repository URL. Ensure it ends with '.git'.")
      .with_details(format!("Expected https://github.com/<owner>/<repo>.git, got '{url}'"))
  }

  /// Neither a URL nor a token flag was given
  pub fn missing_url() -> Self {
    CliError::new(
      ErrorCategory::UserInput,
      "No repository URL provided. Use '--help' for usage details.",
    )
  }

  /// The clone prompt was answered with something other than y or n
  pub fn invalid_answer() -> Self {
    CliError::new(ErrorCategory::UserInput, "Invalid input. Please enter 'y' or 'n'.")
  }

  /// Reading from the terminal failed
  pub fn prompt_failed(error: anyhow::Error) -> Self {
    CliError::new(ErrorCategory::UserInput, "Could not read input from the terminal.").with_details(format!("{error:#}"))
  }

  /// The async runtime could not be started
  pub fn runtime_failed(error: anyhow::Error) -> Self {
    CliError::new(ErrorCategory::Network, "Could not prepare the GitHub request.").with_details(format!("{error:#}"))
  }
}

impl From<FetchError> for CliError {
  fn from(error: FetchError) -> Self {
    match error {
      FetchError::NotFound => CliError::new(ErrorCategory::Remote, error.to_string())
        .with_suggestion("Check the owner and repository name; private repositories need a token with access."),
      FetchError::Unauthorized => CliError::new(ErrorCategory::Remote, error.to_string())
        .with_suggestion(format!(
          "Store a fresh token with {} or {}.",
          format_command(&format!("grs {SET_TOKEN_USAGE}")),
          format_command("grs --update-token")
        )),
      FetchError::Http { .. } | FetchError::MalformedResponse(_) => CliError::new(ErrorCategory::Remote, error.to_string()),
      FetchError::Transport(_) => CliError::new(ErrorCategory::Network, error.to_string()),
    }
  }
}

impl From<ProcessError> for CliError {
  fn from(error: ProcessError) -> Self {
    CliError::new(
      ErrorCategory::ExternalCommand,
      "Failed to clone the repository. Make sure 'git' is installed and accessible.",
    )
    .with_details(error.to_string())
  }
}
