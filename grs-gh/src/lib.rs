//! # GitHub API Client
//!
//! Provides the GitHub REST API integration grs needs: an authenticated
//! client and the repository metadata lookup behind size queries.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use auth::{create_github_client_from_token, create_github_runtime_and_client};
pub use client::{GitHubClient, create_github_client};
pub use error::FetchError;
// Re-export models
pub use models::{GitHubAuth, RepositorySize};
