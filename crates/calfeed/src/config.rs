use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Feed cache TTL in seconds; 0 keeps documents until invalidated (default: 0)
    pub feed_cache_ttl_seconds: u64,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FEED_CACHE_TTL_SECONDS` - Feed cache TTL in seconds (default: 0, no expiry)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            feed_cache_ttl_seconds: env::var("FEED_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.feed_cache_ttl_seconds),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }

    /// Get the feed cache TTL, or `None` when documents never expire by time.
    pub fn feed_cache_ttl(&self) -> Option<Duration> {
        (self.feed_cache_ttl_seconds > 0).then(|| Duration::from_secs(self.feed_cache_ttl_seconds))
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_cache_ttl_seconds: 0,
            request_timeout_seconds: 10,
        }
    }
}
