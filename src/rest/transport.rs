//! The outbound HTTP call, behind a trait.
//!
//! [`TornClient`](crate::rest::TornClient) sends every request through a
//! [`Transport`]. The default [`HttpTransport`] uses `reqwest` with tracing
//! middleware; tests can substitute their own implementation.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::TornError;

/// Performs a single HTTP GET and returns the response body.
///
/// Implementations must not retry: the client decides when to send again.
pub trait Transport: Send + Sync {
    /// GET `url` and return the body text of a successful response.
    ///
    /// Connection failures and non-success statuses are errors.
    fn get(&self, url: &Url) -> impl Future<Output = Result<String, TornError>> + Send;
}

/// `reqwest`-based transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: ClientWithMiddleware,
}

impl HttpTransport {
    /// Create a transport with the default user agent.
    pub fn new() -> Self {
        Self::with_user_agent(None)
    }

    /// Create a transport with a custom user agent.
    pub fn with_user_agent(user_agent: Option<String>) -> Self {
        let mut headers = HeaderMap::new();
        let user_agent = user_agent
            .unwrap_or_else(|| format!("torn-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("torn-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self { http_client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, TornError> {
        let response = self.http_client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        tracing::debug!("Received response: {}", response.status());
        Ok(response.text().await?)
    }
}
