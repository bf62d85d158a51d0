//! Default page size for list endpoints.
//!
//! Historically the default limit differed between callers (the web UI
//! used 20, bulk tooling used 100). It is a single explicit setting
//! here so a deployment picks one and documents it.

use std::env;

/// Page size used when a request does not supply a usable `limit`.
pub const FALLBACK_PAGE_LIMIT: i64 = 20;

#[derive(Clone, Copy, Debug)]
pub struct PaginationConfig {
    pub default_limit: i64,
}

impl PaginationConfig {
    /// Reads `DEFAULT_PAGE_LIMIT` from the environment. Missing,
    /// non-numeric, or non-positive values fall back to
    /// [`FALLBACK_PAGE_LIMIT`].
    pub fn from_env() -> Self {
        let default_limit = env::var("DEFAULT_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|limit| *limit >= 1)
            .unwrap_or(FALLBACK_PAGE_LIMIT);

        Self { default_limit }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: FALLBACK_PAGE_LIMIT,
        }
    }
}
