//! Line-based user input behind a trait, so command handlers can be driven
//! by scripted answers in tests.

use anyhow::Result;
use grs_core::prompts::{prompt_line, prompt_secret};

/// Source of interactive answers
pub trait Prompter {
  /// Ask for a visible line of input
  fn ask_line(&mut self, prompt: &str) -> Result<String>;

  /// Ask for a secret such as an API token
  fn ask_secret(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers from the terminal, or from piped stdin
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
  fn ask_line(&mut self, prompt: &str) -> Result<String> {
    prompt_line(prompt)
  }

  fn ask_secret(&mut self, prompt: &str) -> Result<String> {
    prompt_secret(prompt)
  }
}

#[cfg(test)]
pub(crate) mod testing {
  use std::collections::VecDeque;

  use anyhow::{Result, anyhow};

  use super::Prompter;

  /// Hands out canned answers in order and remembers the prompts it saw
  #[derive(Debug, Default)]
  pub(crate) struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
  }

  impl ScriptedPrompter {
    pub(crate) fn new(answers: &[&str]) -> Self {
      Self {
        answers: answers.iter().map(|a| a.to_string()).collect(),
        prompts: Vec::new(),
      }
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
      self.prompts.push(prompt.to_string());
      self.answers.pop_front().ok_or_else(|| anyhow!("no scripted answer left"))
    }
  }

  impl Prompter for ScriptedPrompter {
    fn ask_line(&mut self, prompt: &str) -> Result<String> {
      self.next(prompt)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
      self.next(prompt)
    }
  }
}
