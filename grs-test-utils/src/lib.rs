//! Test utilities shared across the grs workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable isolation ([`EnvVarGuard`])
//! - Temporary home directories holding a token file ([`TokenHomeGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod home;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use home::TokenHomeGuard;
