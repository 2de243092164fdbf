//! # Token Commands
//!
//! Handlers for `--set-token` and `--update-token`. The token is stored
//! verbatim; nothing checks it against GitHub until the next size query.

use grs_core::TokenStore;
use grs_core::output::{format_path, print_success};
use tracing::info;

use crate::enhanced_errors::CliError;
use crate::prompter::Prompter;

/// Store `token`, replacing any previous one
pub(super) fn handle_set_token(store: &dyn TokenStore, token: &str) -> Result<(), CliError> {
  store.save(token).map_err(CliError::token_not_saved)?;
  info!(location = %store.location(), "GitHub API token saved");

  print_success(&format!(
    "GitHub API token saved successfully in {}.",
    format_path(&store.location())
  ));
  print_success("API token saved successfully.");

  Ok(())
}

/// Ask for a new token and store it
pub(super) fn handle_update_token(store: &dyn TokenStore, prompter: &mut dyn Prompter) -> Result<(), CliError> {
  let answer = prompter
    .ask_secret("Enter your new GitHub API token")
    .map_err(CliError::prompt_failed)?;

  let token = answer.trim();
  if token.is_empty() {
    return Err(CliError::empty_token());
  }

  handle_set_token(store, token)?;
  print_success("Token has been updated successfully!");

  Ok(())
}
