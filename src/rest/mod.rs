//! Torn REST API client.
//!
//! [`TornClient::request`] is the generic entry point: any section, id,
//! selections and extra parameters, answered with the raw JSON body. Typed
//! helpers for a handful of selections are implemented per section.
//!
//! ```rust,no_run
//! use torn_api_client::rest::{ApiRequest, TornClient};
//! use torn_api_client::types::AccessLevel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TornClient::from_env(AccessLevel::Full)?;
//!
//!     let attacks = ApiRequest::new("user", "")
//!         .selection("attacks")
//!         .param("from", "1700000000");
//!     if let Some(json) = client.request(&attacks).await {
//!         println!("{json}");
//!     }
//!
//!     let rates = client.get_bank_rates().await?;
//!     println!("3 month rate: {}%", rates.three_months);
//!     Ok(())
//! }
//! ```

mod client;
mod common;
pub mod endpoints;
pub mod market;
pub mod property;
mod request;
pub mod torn;
mod transport;
pub mod user;

pub use client::{TornClient, TornClientBuilder};
pub use request::ApiRequest;
pub use transport::{HttpTransport, Transport};
