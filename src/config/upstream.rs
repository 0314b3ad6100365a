//! Upstream API Configuration
//!
//! Settings for the Upbit REST client: base URL, per-request timeout and the
//! client-side request budget.

use std::time::Duration;

/// Default Upbit REST base URL
pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com/v1";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upbit's public quotation API allows 10 requests per second per IP
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Upbit client configuration
///
/// ## Environment Variables
///
/// - `UPBIT_BASE_URL`: REST base URL (default: https://api.upbit.com/v1)
/// - `UPBIT_TIMEOUT_SECS`: Timeout applied to each upstream call (default: 10)
/// - `UPBIT_RATE_LIMIT_PER_SEC`: Client-side request budget (default: 10)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Timeout applied to each upstream call
    pub timeout: Duration,

    /// Requests per second allowed by the client-side limiter
    pub requests_per_second: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}

impl UpstreamConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable is set but cannot be parsed, or is zero
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("UPBIT_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = match lookup("UPBIT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("UPBIT_TIMEOUT_SECS must be an integer: {}", e))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err("UPBIT_TIMEOUT_SECS must be greater than zero".to_string());
        }

        let requests_per_second: u32 = match lookup("UPBIT_RATE_LIMIT_PER_SEC") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("UPBIT_RATE_LIMIT_PER_SEC must be an integer: {}", e))?,
            None => DEFAULT_REQUESTS_PER_SECOND,
        };
        if requests_per_second == 0 {
            return Err("UPBIT_RATE_LIMIT_PER_SEC must be greater than zero".to_string());
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            requests_per_second,
        })
    }
}
