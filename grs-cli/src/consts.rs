//! Constants for the grs CLI
//!
//! This module defines static strings used throughout the grs CLI, including
//! the external tool it drives and user-facing guidance.

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";

/// How to store a token, shown whenever one is missing
pub const SET_TOKEN_USAGE: &str = "--set-token <TOKEN>";
