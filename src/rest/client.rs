//! Torn REST API client: the request governor.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use url::Url;

use crate::config::{ApiKey, Config};
use crate::error::{ApiError, TornError};
use crate::rate_limit::{RateLimitConfig, RateLimiter, TtlCache, limits};
use crate::rest::endpoints::TORN_BASE_URL;
use crate::rest::request::ApiRequest;
use crate::rest::transport::{HttpTransport, Transport};
use crate::types::AccessLevel;

/// The Torn REST API client.
///
/// Every request goes through the same pipeline: a response cache lookup, rate
/// limiter admission, one HTTP GET, and interpretation of Torn's error body.
/// Throttling responses (error code 5) raise the limiter's backoff and are retried
/// a bounded number of times; every other failure is terminal.
///
/// Clones share the rate limiter and the cache.
///
/// # Example
///
/// ```rust,no_run
/// use torn_api_client::rest::{ApiRequest, TornClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TornClient::builder().api_key("my_api_key").build()?;
///
///     let request = ApiRequest::new("user", "").selection("basic,bars");
///     match client.request(&request).await {
///         Some(json) => println!("{json}"),
///         None => println!("no data"),
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TornClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
    api_key: ApiKey,
    access_level: AccessLevel,
    limiter: Arc<RateLimiter>,
    cache: Arc<Mutex<TtlCache<String, Value>>>,
    max_throttle_retries: u32,
}

impl TornClient {
    /// Create a new client builder.
    pub fn builder() -> TornClientBuilder {
        TornClientBuilder::new()
    }

    /// Create a client using the configured key for an access level.
    pub fn from_config(config: &Config, level: AccessLevel) -> Result<Self, TornError> {
        let api_key = config.api_key(level).inspect_err(|_| {
            tracing::error!("API key for access level '{}' not found", level);
        })?;
        Self::builder()
            .api_key(api_key.expose_secret())
            .access_level(level)
            .build()
    }

    /// Load configuration (including `.env`) and create a client for an access level.
    pub fn from_env(level: AccessLevel) -> Result<Self, TornError> {
        let config = Config::load()?;
        Self::from_config(&config, level)
    }
}

impl<T: Transport> TornClient<T> {
    /// Send a request and return the parsed body, or `None` on any failure.
    ///
    /// The reason for a failure is logged, not returned; use
    /// [`try_request`](Self::try_request) to inspect it.
    pub async fn request(&self, request: &ApiRequest) -> Option<Value> {
        match self.try_request(request).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(
                    section = request.section(),
                    id = request.id(),
                    selections = %request.selections_csv(),
                    "Request failed: {}",
                    e
                );
                None
            }
        }
    }

    /// Send a request and deserialize the body into `R`.
    pub async fn fetch<R>(&self, request: &ApiRequest) -> Result<R, TornError>
    where
        R: serde::de::DeserializeOwned,
    {
        let value = self.try_request(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Send a request and return the parsed body, keeping the failure reason.
    pub async fn try_request(&self, request: &ApiRequest) -> Result<Value, TornError> {
        let key = request.cache_key();

        if let Some(cached) = self.cache.lock().await.get(&key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(cached.clone());
        }

        let url = request.url(&self.base_url, &self.api_key)?;
        let mut throttled: u32 = 0;

        loop {
            self.limiter.acquire().await;
            tracing::info!("Making request to {}", key);

            let body = self.transport.get(&url).await?;
            match parse_body(&body) {
                Err(TornError::Api(api_error)) if api_error.is_rate_limit() => {
                    throttled += 1;
                    self.limiter.increase_wait_time().await;
                    if throttled > self.max_throttle_retries {
                        return Err(TornError::ThrottleRetriesExhausted {
                            attempts: throttled,
                        });
                    }
                    tracing::warn!(
                        "Throttled by the API ({}), retry {} of {}",
                        api_error,
                        throttled,
                        self.max_throttle_retries
                    );
                }
                Err(e) => return Err(e),
                Ok(value) => {
                    self.cache.lock().await.insert(key, value.clone());
                    return Ok(value);
                }
            }
        }
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// The shared rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Access level of the key in use.
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> std::fmt::Debug for TornClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TornClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_level", &self.access_level)
            .field("max_throttle_retries", &self.max_throttle_retries)
            .finish()
    }
}

/// Parse a response body into a JSON object, surfacing Torn's error body.
///
/// Anything other than a JSON object is treated as an invalid response.
fn parse_body(body: &str) -> Result<Value, TornError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        TornError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })?;

    let Some(object) = value.as_object() else {
        return Err(TornError::InvalidResponse(format!(
            "Expected a JSON object, got: {}",
            body
        )));
    };

    if let Some(error) = object.get("error") {
        let api_error = ApiError::from_error_value(error).ok_or_else(|| {
            TornError::InvalidResponse(format!("Malformed error object: {}", error))
        })?;
        return Err(TornError::Api(api_error));
    }

    Ok(value)
}

/// Builder for [`TornClient`].
pub struct TornClientBuilder {
    base_url: String,
    api_key: Option<ApiKey>,
    access_level: AccessLevel,
    rate_limit: RateLimitConfig,
    cache_ttl: Duration,
    max_throttle_retries: u32,
    user_agent: Option<String>,
}

impl TornClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: TORN_BASE_URL.to_string(),
            api_key: None,
            access_level: AccessLevel::default(),
            rate_limit: RateLimitConfig::default(),
            cache_ttl: limits::CACHE_TTL,
            max_throttle_retries: limits::MAX_THROTTLE_RETRIES,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    /// Set the access level the key belongs to.
    pub fn access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = level;
        self
    }

    /// Set the rate limiter configuration.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Set how long responses stay cached.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set how many times a throttled request is retried before giving up.
    pub fn max_throttle_retries(mut self, retries: u32) -> Self {
        self.max_throttle_retries = retries;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client with the default HTTP transport.
    pub fn build(self) -> Result<TornClient, TornError> {
        let transport = HttpTransport::with_user_agent(self.user_agent.clone());
        self.build_with_transport(transport)
    }

    /// Build the client with a custom transport.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<TornClient<T>, TornError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(TornError::MissingApiKey {
                level: self.access_level,
            })?;
        if self.rate_limit.enabled && self.rate_limit.limit == 0 {
            return Err(TornError::Config(
                "rate limit must allow at least one request per timeframe".to_string(),
            ));
        }
        let base_url = Url::parse(&self.base_url)?;

        tracing::info!(
            "TornClient initialized with access level: {}",
            self.access_level
        );

        Ok(TornClient {
            transport,
            base_url,
            api_key,
            access_level: self.access_level,
            limiter: Arc::new(RateLimiter::new(self.rate_limit)),
            cache: Arc::new(Mutex::new(TtlCache::new(self.cache_ttl))),
            max_throttle_retries: self.max_throttle_retries,
        })
    }
}

impl Default for TornClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
