//! # Clone Step
//!
//! After a successful size lookup grs offers to clone the repository. The
//! decision is a pure mapping from the user's answer to an action; reading
//! the answer and running `git` are adapters around it.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::consts;

/// The user's reply to the clone prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneAnswer {
  Yes,
  No,
  Invalid,
}

impl CloneAnswer {
  /// Classify raw input. Only `y` and `n` (any case) are accepted.
  pub fn parse(input: &str) -> Self {
    match input.trim().to_lowercase().as_str() {
      "y" => CloneAnswer::Yes,
      "n" => CloneAnswer::No,
      _ => CloneAnswer::Invalid,
    }
  }
}

/// What to do with an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneAction {
  Clone,
  Skip,
  Reject,
}

/// Map an answer to an action. Invalid answers never default to either side.
pub fn decide(answer: CloneAnswer) -> CloneAction {
  match answer {
    CloneAnswer::Yes => CloneAction::Clone,
    CloneAnswer::No => CloneAction::Skip,
    CloneAnswer::Invalid => CloneAction::Reject,
  }
}

/// Failure to run the external clone command
#[derive(Debug, Error)]
pub enum ProcessError {
  /// The executable could not be started at all
  #[error("failed to run '{program}': {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  /// The executable ran and reported failure
  #[error("'{program}' exited with {status}")]
  Failed { program: String, status: ExitStatus },
}

/// Something that can clone a repository from a URL
pub trait VersionControlClient {
  fn clone_repository(&self, url: &str) -> Result<(), ProcessError>;
}

/// Runs `git clone <url>` in the current directory with inherited stdio
#[derive(Debug, Default)]
pub struct GitCli;

impl VersionControlClient for GitCli {
  #[instrument(skip(self), level = "debug")]
  fn clone_repository(&self, url: &str) -> Result<(), ProcessError> {
    let status = Command::new(consts::GIT_EXECUTABLE)
      .args(["clone", url])
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()
      .map_err(|source| ProcessError::Spawn {
        program: consts::GIT_EXECUTABLE.to_string(),
        source,
      })?;

    debug!(%status, "git clone finished");

    if status.success() {
      Ok(())
    } else {
      Err(ProcessError::Failed {
        program: consts::GIT_EXECUTABLE.to_string(),
        status,
      })
    }
  }
}

/// Result of the clone step
#[derive(Debug)]
pub enum CloneOutcome {
  Cloned,
  Skipped,
  Invalid,
  Failed(ProcessError),
}

/// Act on an answer, invoking `vcs` only when the answer is yes.
pub fn run_clone_step(answer: CloneAnswer, url: &str, vcs: &dyn VersionControlClient) -> CloneOutcome {
  match decide(answer) {
    CloneAction::Clone => match vcs.clone_repository(url) {
      Ok(()) => CloneOutcome::Cloned,
      Err(e) => CloneOutcome::Failed(e),
    },
    CloneAction::Skip => CloneOutcome::Skipped,
    CloneAction::Reject => CloneOutcome::Invalid,
  }
}


#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::testing::RecordingClient;
  use super::*;

  const URL: &str = "https://github.com/alice/proj.git";

  #[test_case("y", CloneAnswer::Yes ; "lower y")]
  #[test_case("Y", CloneAnswer::Yes ; "upper y")]
  #[test_case(" y\n", CloneAnswer::Yes ; "padded y")]
  #[test_case("n", CloneAnswer::No ; "lower n")]
  #[test_case("N", CloneAnswer::No ; "upper n")]
  #[test_case("yes", CloneAnswer::Invalid ; "full word")]
  #[test_case("maybe", CloneAnswer::Invalid ; "other word")]
  #[test_case("", CloneAnswer::Invalid ; "empty")]
  fn test_parse_answer(input: &str, expected: CloneAnswer) {
    assert_eq!(CloneAnswer::parse(input), expected);
  }

  #[test]
  fn test_decide() {
    assert_eq!(decide(CloneAnswer::Yes), CloneAction::Clone);
    assert_eq!(decide(CloneAnswer::No), CloneAction::Skip);
    assert_eq!(decide(CloneAnswer::Invalid), CloneAction::Reject);
  }

  #[test]
  fn test_upper_and_lower_y_clone_the_same_url() {
    let lower = RecordingClient::new();
    let upper = RecordingClient::new();

    assert!(matches!(
      run_clone_step(CloneAnswer::parse("y"), URL, &lower),
      CloneOutcome::Cloned
    ));
    assert!(matches!(
      run_clone_step(CloneAnswer::parse("Y"), URL, &upper),
      CloneOutcome::Cloned
    ));
    assert_eq!(lower.cloned(), vec![URL.to_string()]);
    assert_eq!(upper.cloned(), lower.cloned());
  }

  #[test]
  fn test_skip_does_not_clone() {
    let vcs = RecordingClient::new();

    assert!(matches!(run_clone_step(CloneAnswer::No, URL, &vcs), CloneOutcome::Skipped));
    assert!(vcs.cloned().is_empty());
  }

  #[test]
  fn test_invalid_answer_does_not_clone() {
    let vcs = RecordingClient::new();

    let outcome = run_clone_step(CloneAnswer::parse("maybe"), URL, &vcs);
    assert!(matches!(outcome, CloneOutcome::Invalid));
    assert!(vcs.cloned().is_empty());
  }

  #[test]
  fn test_clone_failure_is_reported() {
    let vcs = RecordingClient::failing();

    let outcome = run_clone_step(CloneAnswer::Yes, URL, &vcs);
    assert!(matches!(outcome, CloneOutcome::Failed(ProcessError::Spawn { .. })));
    assert_eq!(vcs.cloned(), vec![URL.to_string()]);
  }
}
