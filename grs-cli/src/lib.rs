//! # grs CLI Library
//!
//! Modules behind the `grs` binary: argument parsing, token commands, the
//! repository size query, and the optional clone step.

pub mod cli;
pub mod clone;
pub mod consts;
pub mod enhanced_errors;
pub mod prompter;
