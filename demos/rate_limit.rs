//! Example: Rate limiter and response cache building blocks.
//!
//! Run with: cargo run --example rate_limit

use std::time::Duration;

use torn_api_client::rate_limit::{RateLimitConfig, RateLimiter, SlidingWindow, TtlCache};

#[tokio::main]
async fn main() {
    // TTL cache for responses keyed by request.
    let mut cache: TtlCache<String, String> = TtlCache::new(Duration::from_secs(2));
    let key = "torn/?selections=bank".to_string();
    cache.insert(key.clone(), r#"{"bank":{}}"#.to_string());
    println!("Cached {}: {:?}", key, cache.get(&key));
    tokio::time::sleep(Duration::from_secs(2)).await;
    println!("After the TTL: {:?}", cache.get(&key));

    // Sliding window on its own.
    let mut window = SlidingWindow::new(Duration::from_secs(1), 2);
    window.record();
    window.record();
    println!("Window remaining: {}", window.remaining());
    println!("Next slot in: {:?}", window.time_until_available());

    // Async limiter: the third request waits for the window to roll over.
    let limiter = RateLimiter::new(RateLimitConfig {
        limit: 2,
        timeframe: Duration::from_secs(1),
        ..Default::default()
    });
    for i in 1..=3 {
        let started = tokio::time::Instant::now();
        limiter.acquire().await;
        println!("Request {} admitted after {:?}", i, started.elapsed());
    }

    // A throttling response from the API raises the backoff for the next request.
    limiter.increase_wait_time().await;
    println!(
        "Backoff after throttling: {:?}",
        limiter.current_wait_time().await
    );
    let started = tokio::time::Instant::now();
    limiter.acquire().await;
    println!("Request admitted after backoff: {:?}", started.elapsed());
}
