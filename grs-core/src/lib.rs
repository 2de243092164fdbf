//! # grs Core Library
//!
//! Core building blocks for the grs command-line tool: the persisted API
//! token, repository URL parsing, size formatting, and terminal output
//! helpers. Nothing in this crate talks to the network.

pub mod config;
pub mod consts;
pub mod creds;
pub mod output;
pub mod prompts;
pub mod size;
pub mod url;

// Re-export main types
pub use creds::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use size::format_size;
pub use url::{RepositoryRef, parse_repo_url};
