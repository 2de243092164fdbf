//! # Command Line Interface
//!
//! Defines the CLI structure for the grs tool and dispatches to the token
//! and size handlers. grs has a single command with no subcommands.

mod size;
mod token;

use clap::builder::styling::AnsiColor;
use clap::builder::{NonEmptyStringValueParser, Styles};
use clap::{ArgAction, Parser};
use grs_core::{ColorMode, FileTokenStore, TokenStore};
use tracing::debug;

use crate::clone::{GitCli, VersionControlClient};
use crate::enhanced_errors::CliError;
use crate::prompter::{Prompter, TerminalPrompter};

/// Top-level CLI command for the grs tool
#[derive(Parser, Debug)]
#[command(name = "grs")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A CLI tool to fetch and display the size of GitHub repositories.")]
#[command(
  long_about = "A CLI tool to fetch and display the size of GitHub repositories.\n\n\
        Looks up the repository behind an https://github.com/<owner>/<repo>.git URL,\n\
        prints its stored size, and offers to clone it with git. A GitHub API token\n\
        must be stored first with --set-token."
)]
#[command(after_help = "Developed by Pezhvak with ❤️")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// The URL of the GitHub repository
  #[arg(
    value_name = "REPO_URL",
    long_help = "The HTTPS clone URL of the GitHub repository, for example\n\
             https://github.com/owner/repo.git"
  )]
  pub repo_url: Option<String>,

  /// Set the GitHub API token
  #[arg(long = "set-token", value_name = "TOKEN", value_parser = NonEmptyStringValueParser::new())]
  pub set_token: Option<String>,

  /// Update the GitHub API token
  #[arg(long = "update-token")]
  pub update_token: bool,

  /// Print the size without offering to clone the repository
  #[arg(long = "no-clone")]
  pub no_clone: bool,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

/// Run the command against the real token file, terminal and git.
pub fn handle_cli(cli: Cli) -> Result<(), CliError> {
  cli.colors.apply();

  let store = FileTokenStore::from_env().map_err(CliError::unreadable_token)?;
  debug!(path = %store.path().display(), "Resolved token file");

  run_cli(&cli, &store, &mut TerminalPrompter, &GitCli)
}

/// Dispatch in the order token update, token set, size query.
///
/// The token file is read at most once per run.
pub fn run_cli(
  cli: &Cli,
  store: &dyn TokenStore,
  prompter: &mut dyn Prompter,
  vcs: &dyn VersionControlClient,
) -> Result<(), CliError> {
  if cli.update_token {
    return token::handle_update_token(store, prompter);
  }

  if let Some(new_token) = &cli.set_token {
    return token::handle_set_token(store, new_token);
  }

  let Some(token) = store.load().map_err(CliError::unreadable_token)? else {
    return Err(CliError::missing_token());
  };

  let Some(repo_url) = &cli.repo_url else {
    return Err(CliError::missing_url());
  };

  size::handle_size_query(&token, repo_url, cli.no_clone, prompter, vcs)
}
