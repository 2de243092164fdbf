//! Core constants shared across grs components.

/// Host prefix every accepted repository URL must start with.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Suffix every accepted repository URL must end with.
pub const GIT_SUFFIX: &str = ".git";

/// File name of the token file inside the user's home directory.
pub const TOKEN_FILE_NAME: &str = ".github_token";

/// Environment variable overriding the token file location.
pub const ENV_TOKEN_PATH: &str = "GRS_TOKEN_PATH";

/// Environment variable overriding the GitHub API base URL.
pub const ENV_API_URL: &str = "GRS_API_URL";
