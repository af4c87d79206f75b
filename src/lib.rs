//! # Torn API Client
//!
//! An async Rust client for the Torn REST API that stays within the per-key
//! request quota.
//!
//! ## Features
//!
//! - One generic entry point for any section, id, selections and parameters
//! - Sliding-window rate limiting shared by every clone of a client
//! - Backoff and bounded retry when the API answers with its throttling code
//! - Short-lived response cache for repeated identical requests
//! - Typed helpers for common selections
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use torn_api_client::rest::{ApiRequest, TornClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TornClient::builder().api_key("my_api_key").build()?;
//!
//!     let request = ApiRequest::new("user", "").selection("basic");
//!     match client.request(&request).await {
//!         Some(json) => println!("{json}"),
//!         None => eprintln!("request failed, see logs"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{ApiError, TornError};
pub use rest::{ApiRequest, TornClient};
pub use types::AccessLevel;

/// Result type alias using TornError
pub type Result<T> = std::result::Result<T, TornError>;
