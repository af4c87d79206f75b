//! Rate limiting and response caching for the Torn API.
//!
//! Torn allows a limited number of requests per minute per key and answers
//! error code 5 once that limit is exceeded. This module keeps the client under
//! the limit and backs off when the API reports throttling anyway.
//!
//! ## Components
//!
//! - [`SlidingWindow`] - timestamps of requests sent within the timeframe
//! - [`RateLimiter`] - async admission over a sliding window, with backoff
//! - [`TtlCache`] - short-lived response cache
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use torn_api_client::rate_limit::{RateLimitConfig, RateLimiter, TtlCache};
//!
//! let limiter = RateLimiter::new(RateLimitConfig::default());
//! assert_eq!(limiter.config().limit, 100);
//!
//! let mut responses: TtlCache<String, String> = TtlCache::new(Duration::from_secs(30));
//! responses.insert("torn/?selections=bank".to_string(), "{}".to_string());
//! ```

mod limiter;
mod ttl_cache;
mod window;

pub use limiter::RateLimiter;
pub use ttl_cache::TtlCache;
pub use window::SlidingWindow;

use std::time::Duration;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per timeframe.
    ///
    /// A bare [`RateLimiter`] treats zero as no window bound (only the backoff
    /// applies); [`TornClientBuilder`](crate::rest::TornClientBuilder) rejects it.
    pub limit: u32,
    /// Length of the rolling window.
    pub timeframe: Duration,
    /// Multiplier applied to the backoff on every throttling response.
    pub backoff_factor: f64,
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: limits::REQUESTS_PER_MINUTE,
            timeframe: limits::TIMEFRAME,
            backoff_factor: limits::BACKOFF_FACTOR,
            enabled: true,
        }
    }
}

/// Rate limit and cache constants.
pub mod limits {
    use std::time::Duration;

    /// Requests allowed per key per minute.
    pub const REQUESTS_PER_MINUTE: u32 = 100;
    /// Rolling window length.
    pub const TIMEFRAME: Duration = Duration::from_secs(60);
    /// Backoff growth per throttling response.
    pub const BACKOFF_FACTOR: f64 = 2.0;
    /// How long a response stays cached.
    pub const CACHE_TTL: Duration = Duration::from_secs(30);
    /// Retries after a throttling response before giving up.
    pub const MAX_THROTTLE_RETRIES: u32 = 5;
}
