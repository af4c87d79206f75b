//! Sliding window of request timestamps.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use torn_api_client::rate_limit::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(Duration::from_secs(60), 2);
//! window.record();
//! window.record();
//! assert_eq!(window.remaining(), 0);
//! assert!(window.time_until_available().is_some());
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

/// Timestamps of sent requests within a rolling timeframe.
///
/// Timestamps are kept in insertion order, so stale entries are always at the
/// front and pruning stops at the first live one.
#[derive(Debug)]
pub struct SlidingWindow {
    /// Request timestamps, oldest first
    requests: VecDeque<Instant>,
    /// Window duration
    window: Duration,
    /// Maximum requests per window
    max_requests: u32,
}

impl SlidingWindow {
    /// Create a new sliding window.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            requests: VecDeque::with_capacity(max_requests as usize),
            window,
            max_requests,
        }
    }

    /// Record a request sent now.
    pub fn record(&mut self) {
        self.requests.push_back(Instant::now());
    }

    /// Remove timestamps that have left the window.
    pub fn prune(&mut self) {
        let now = Instant::now();
        while let Some(oldest) = self.requests.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                self.requests.pop_front();
            } else {
                break;
            }
        }
    }

    /// Time until a slot frees up, or `None` if one is free now.
    ///
    /// Expects the window to have been pruned.
    pub fn time_until_available(&self) -> Option<Duration> {
        if (self.requests.len() as u32) < self.max_requests {
            return None;
        }
        // Only the oldest entry beyond the limit matters when the window is overfull.
        let excess = self.requests.len() - self.max_requests as usize;
        self.requests
            .get(excess)
            .map(|oldest| self.window.saturating_sub(oldest.elapsed()))
    }

    /// Number of timestamps currently held.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check if the window holds no timestamps.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Number of requests that may still be sent in the current window.
    pub fn remaining(&self) -> u32 {
        let live = self
            .requests
            .iter()
            .filter(|ts| ts.elapsed() < self.window)
            .count() as u32;
        self.max_requests.saturating_sub(live)
    }
}
