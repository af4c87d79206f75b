//! Request admission with backoff on provider throttling.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use torn_api_client::rate_limit::{RateLimitConfig, RateLimiter};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let limiter = RateLimiter::new(RateLimitConfig {
//!     limit: 2,
//!     timeframe: Duration::from_secs(60),
//!     ..Default::default()
//! });
//!
//! limiter.acquire().await;
//! assert_eq!(limiter.remaining().await, 1);
//! # }
//! ```

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::rate_limit::{RateLimitConfig, SlidingWindow};

/// Deadline used when the backoff is too large to add to the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Sliding-window rate limiter shared by every request a client sends.
///
/// The limit is tracked per process. Several processes sharing one key can still
/// exceed Torn's per-IP quota; the backoff on throttling responses is the only
/// protection in that case.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<LimiterState>,
}

#[derive(Debug)]
struct LimiterState {
    window: SlidingWindow,
    backoff: Backoff,
}

/// Extra wait imposed after the API reported throttling.
#[derive(Debug, Default)]
struct Backoff {
    current_wait_time: Duration,
    /// No request is admitted before this instant.
    blocked_until: Option<Instant>,
    throttle_count: u64,
}

impl LimiterState {
    /// How long a caller must wait before sending, if at all.
    fn required_wait(&mut self) -> Option<Duration> {
        self.window.prune();
        let window_wait = self.window.time_until_available().unwrap_or_default();

        let now = Instant::now();
        let backoff_wait = match self.backoff.blocked_until {
            Some(deadline) if deadline > now => deadline - now,
            Some(_) => {
                self.backoff.blocked_until = None;
                Duration::ZERO
            }
            None => Duration::ZERO,
        };

        Some(window_wait.max(backoff_wait)).filter(|w| !w.is_zero())
    }
}

impl RateLimiter {
    /// Create a new rate limiter.
    pub fn new(config: RateLimitConfig) -> Self {
        let window = SlidingWindow::new(config.timeframe, config.limit);
        Self {
            config,
            state: Mutex::new(LimiterState {
                window,
                backoff: Backoff::default(),
            }),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Wait until a request may be sent without exceeding the limit.
    ///
    /// Never fails. Does not record the request; pair with [`log_request`](Self::log_request),
    /// or use [`acquire`](Self::acquire) to do both atomically.
    pub async fn admit(&self) {
        self.wait_for_slot(false).await;
    }

    /// Record that a request was just sent.
    pub async fn log_request(&self) {
        self.state.lock().await.window.record();
    }

    /// Wait for a slot and record the request under the same lock.
    pub async fn acquire(&self) {
        self.wait_for_slot(true).await;
    }

    /// React to a throttling response from the API.
    ///
    /// The wait grows by the backoff factor on every call and is never shorter
    /// than one timeframe. Every admission waits until it has passed, counted
    /// from this call.
    pub async fn increase_wait_time(&self) {
        let mut state = self.state.lock().await;
        let backoff = &mut state.backoff;
        let grown = backoff.current_wait_time.as_secs_f64() * self.backoff_factor();
        backoff.current_wait_time = Duration::try_from_secs_f64(grown)
            .unwrap_or(Duration::MAX)
            .max(self.config.timeframe);

        let now = Instant::now();
        backoff.blocked_until = Some(
            now.checked_add(backoff.current_wait_time)
                .unwrap_or_else(|| now + FAR_FUTURE),
        );
        backoff.throttle_count += 1;
        tracing::debug!(
            "Backoff raised to {:?} after {} throttling responses",
            backoff.current_wait_time,
            backoff.throttle_count
        );
    }

    /// Backoff factor, treating invalid values as 1.
    fn backoff_factor(&self) -> f64 {
        let factor = self.config.backoff_factor;
        if factor.is_finite() && factor >= 1.0 {
            factor
        } else {
            1.0
        }
    }

    /// Current backoff wait time (zero when not backing off).
    pub async fn current_wait_time(&self) -> Duration {
        self.state.lock().await.backoff.current_wait_time
    }

    /// Total number of throttling responses reported.
    pub async fn throttle_count(&self) -> u64 {
        self.state.lock().await.backoff.throttle_count
    }

    /// Number of requests recorded within the current timeframe.
    pub async fn in_window(&self) -> usize {
        let mut state = self.state.lock().await;
        state.window.prune();
        state.window.len()
    }

    /// Number of requests that may still be sent in the current timeframe.
    pub async fn remaining(&self) -> u32 {
        self.state.lock().await.window.remaining()
    }

    async fn wait_for_slot(&self, record: bool) {
        let mut waited = false;

        loop {
            let mut state = self.state.lock().await;
            let wait = if self.config.enabled {
                state.required_wait()
            } else {
                None
            };

            match wait {
                None => {
                    if !waited {
                        state.backoff.current_wait_time = Duration::ZERO;
                    }
                    if record {
                        state.window.record();
                    }
                    return;
                }
                Some(wait_time) => {
                    drop(state);
                    tracing::debug!("Rate limit reached, waiting {:?}", wait_time);
                    waited = true;
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
