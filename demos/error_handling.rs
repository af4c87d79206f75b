//! Example: Handling errors from the Torn API.
//!
//! Run with: cargo run --example error_handling

use torn_api_client::error::TornError;
use torn_api_client::rest::{ApiRequest, TornClient};

#[tokio::main]
async fn main() {
    // A deliberately invalid key: Torn answers with error code 2.
    let client = match TornClient::builder().api_key("invalid_key").build() {
        Ok(client) => client,
        Err(e) => {
            println!("Could not build client: {}", e);
            return;
        }
    };

    let request = ApiRequest::new("user", "").selection("basic");

    match client.try_request(&request).await {
        Ok(json) => println!("Unexpected success: {}", json),
        Err(TornError::Api(error)) if error.is_key_error() => {
            println!("Key rejected ({}): {}", error.code, error.description());
        }
        Err(TornError::Api(error)) if error.is_access_denied() => {
            println!("Access denied: {}", error);
        }
        Err(TornError::ThrottleRetriesExhausted { attempts }) => {
            println!("Still throttled after {} attempts", attempts);
        }
        Err(TornError::Http(e)) => println!("HTTP error: {}", e),
        Err(TornError::HttpMiddleware(e)) => println!("Network error: {}", e),
        Err(e) => println!("Other error: {}", e),
    }

    // The plain entry point only logs failures and returns None.
    if client.request(&request).await.is_none() {
        println!("request() returned None");
    }

    // A client cannot be built without a key.
    if let Err(e) = TornClient::builder().build() {
        println!("Builder error: {}", e);
    }
}
