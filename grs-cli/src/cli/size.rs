//! # Size Query
//!
//! Parses the repository URL, fetches the repository metadata, prints the
//! formatted size, and then runs the clone prompt.

use grs_core::output::{format_repo_name, print_info, print_success, print_warning};
use grs_core::{RepositoryRef, format_size, parse_repo_url};
use grs_gh::{GitHubClient, RepositorySize, create_github_runtime_and_client};
use tokio::runtime::Runtime;
use tracing::{debug, instrument};

use crate::clone::{CloneAction, CloneAnswer, CloneOutcome, VersionControlClient, decide, run_clone_step};
use crate::enhanced_errors::CliError;
use crate::prompter::Prompter;

/// Report the size of the repository behind `repo_url`, then offer to clone it
pub(super) fn handle_size_query(
  token: &str,
  repo_url: &str,
  no_clone: bool,
  prompter: &mut dyn Prompter,
  vcs: &dyn VersionControlClient,
) -> Result<(), CliError> {
  let repo = parse_repo_url(repo_url).ok_or_else(|| CliError::invalid_url(repo_url))?;
  debug!(%repo, "Parsed repository URL");

  let (rt, client) = create_github_runtime_and_client(token).map_err(CliError::runtime_failed)?;
  let size = fetch_size(&rt, &client, &repo)?;

  print_success(&format!(
    "Size of repository {}: {}",
    format_repo_name(&repo.to_string()),
    format_size(size.size_kb)
  ));

  if no_clone {
    debug!("Clone prompt disabled");
    return Ok(());
  }

  prompt_and_clone(&size.clone_url, prompter, vcs)
}

#[instrument(skip(rt, client), level = "debug")]
fn fetch_size(rt: &Runtime, client: &GitHubClient, repo: &RepositoryRef) -> Result<RepositorySize, CliError> {
  let size = rt.block_on(client.get_repository_size(&repo.owner, &repo.name))?;
  debug!(size_kb = size.size_kb, "Fetched repository size");
  Ok(size)
}

/// Ask once whether to clone; invalid answers are not re-asked
fn prompt_and_clone(
  clone_url: &str,
  prompter: &mut dyn Prompter,
  vcs: &dyn VersionControlClient,
) -> Result<(), CliError> {
  let input = prompter
    .ask_line(&format!("Do you want to clone the repository '{clone_url}'? (y/n)"))
    .map_err(CliError::prompt_failed)?;
  let answer = CloneAnswer::parse(&input);

  if decide(answer) == CloneAction::Clone {
    print_info("Cloning repository...");
  }

  match run_clone_step(answer, clone_url, vcs) {
    CloneOutcome::Cloned => {
      print_success("Repository cloned successfully.");
      Ok(())
    }
    CloneOutcome::Skipped => {
      print_warning("Skipping repository cloning.");
      Ok(())
    }
    CloneOutcome::Invalid => Err(CliError::invalid_answer()),
    CloneOutcome::Failed(e) => Err(e.into()),
  }
}
