//! # Prompts Module
//!
//! Provides a custom dialoguer theme for consistent styling across grs's
//! interactive prompts, plus thin line-reading adapters. When stdin is not a
//! terminal the adapters read one plain line instead, so answers can be piped
//! in.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

/// Returns a custom dialoguer theme matching grs's color palette.
///
/// Features:
/// - Green bold prompt text
/// - Green `❯` prefix on active item
pub fn grs_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().green().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Ask for one line of visible input. Empty answers are allowed.
pub fn prompt_line(prompt: &str) -> Result<String> {
  if !io::stdin().is_terminal() {
    return read_piped_line(prompt);
  }

  Input::<String>::with_theme(&grs_theme())
    .with_prompt(prompt)
    .allow_empty(true)
    .interact_text()
    .context("Terminal input")
}

/// Ask for a secret without echoing it. Empty answers are re-prompted.
pub fn prompt_secret(prompt: &str) -> Result<String> {
  if !io::stdin().is_terminal() {
    return read_piped_line(prompt);
  }

  Password::with_theme(&grs_theme())
    .with_prompt(prompt)
    .interact()
    .context("Terminal input")
}

fn read_piped_line(prompt: &str) -> Result<String> {
  print!("{prompt}: ");
  io::stdout().flush()?;

  read_line_from(&mut io::stdin().lock())
}

/// Read a single line, dropping the line terminator.
fn read_line_from(reader: &mut impl BufRead) -> Result<String> {
  let mut line = String::new();
  reader.read_line(&mut line).context("Failed to read from stdin")?;

  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
