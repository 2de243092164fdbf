//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.
//!
//! Colors are applied through `if_supports_color`, so they follow the
//! terminal's capabilities unless [`ColorMode::apply`] forces them on or off.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Whether colors are forced on, forced off, or left to detection
  pub fn forced(self) -> Option<bool> {
    match self {
      ColorMode::Yes | ColorMode::Always => Some(true),
      ColorMode::No | ColorMode::Never => Some(false),
      ColorMode::Auto => None,
    }
  }

  /// Apply this mode process-wide
  pub fn apply(self) {
    match self.forced() {
      Some(enabled) => owo_colors::set_override(enabled),
      None => owo_colors::unset_override(),
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

fn styled_line(stream: Stream, symbol: &str, message: &str, style: Style) -> String {
  format!(
    "{} {}",
    symbol.if_supports_color(stream, |s| s.style(style.bold())),
    message.if_supports_color(stream, |m| m.style(style))
  )
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{}", styled_line(Stream::Stdout, &check, message, Style::new().green()));
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{}", styled_line(Stream::Stderr, &cross, message, Style::new().red()));
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{}", styled_line(Stream::Stdout, &warning, message, Style::new().yellow()));
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{}", styled_line(Stream::Stdout, &info, message, Style::new().blue()));
}

/// Format a repository name
pub fn format_repo_name(name: &str) -> String {
  name
    .if_supports_color(Stream::Stdout, |n| n.style(Style::new().bright_cyan().bold()))
    .to_string()
}

/// Format a file path
pub fn format_path(path: &str) -> String {
  path
    .if_supports_color(Stream::Stdout, |p| p.bright_green())
    .to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.if_supports_color(Stream::Stdout, |c| c.purple()).to_string()
}
