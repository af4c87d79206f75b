//! Configuration: API keys per access level and log verbosity.
//!
//! Keys are read from `TORN_API_KEY_FULL`, `TORN_API_KEY_LIMITED`,
//! `TORN_API_KEY_MIN` and `TORN_API_KEY_PUBLIC`, falling back to `Full`,
//! `Limited`, `Min` and `Public`. Verbosity comes from `TORN_LOG_LEVEL`, falling
//! back to `DEBUG_LEVEL` (default `warn`).
//!
//! ```rust
//! use torn_api_client::config::Config;
//! use torn_api_client::types::AccessLevel;
//!
//! let config = Config::new().with_key(AccessLevel::Public, "abc123");
//! assert!(config.api_key(AccessLevel::Public).is_ok());
//! assert!(config.api_key(AccessLevel::Full).is_err());
//! ```

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use crate::error::TornError;
use crate::types::{AccessLevel, LogLevel};

/// Environment variable holding the log verbosity label.
pub const LOG_LEVEL_VAR: &str = "TORN_LOG_LEVEL";

/// Read when [`LOG_LEVEL_VAR`] is unset.
pub const FALLBACK_LOG_LEVEL_VAR: &str = "DEBUG_LEVEL";

/// A Torn API key.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Get the raw key for placing it in a request.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolved client configuration.
#[derive(Clone, Default)]
pub struct Config {
    keys: HashMap<AccessLevel, ApiKey>,
    log_level: LogLevel,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file if there is one, then read the environment.
    pub fn load() -> Result<Self, TornError> {
        match dotenv::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(TornError::Config(format!("failed to read .env: {e}"))),
        }
        Self::from_env()
    }

    /// Read configuration from the process environment.
    ///
    /// Missing keys are not an error here; asking for a level without a key is.
    pub fn from_env() -> Result<Self, TornError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TornError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // First non-blank value among the given names.
        let first_set = |names: [&str; 2]| {
            names.into_iter().find_map(|name| {
                lookup(name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
        };

        let keys = AccessLevel::ALL
            .iter()
            .filter_map(|level| {
                first_set([level.env_var(), level.fallback_env_var()])
                    .map(|key| (*level, ApiKey::new(key)))
            })
            .collect();

        let log_level = match first_set([LOG_LEVEL_VAR, FALLBACK_LOG_LEVEL_VAR]) {
            Some(label) => label.parse()?,
            None => LogLevel::default(),
        };

        Ok(Self { keys, log_level })
    }

    /// Set the key for an access level.
    pub fn with_key(mut self, level: AccessLevel, key: impl Into<String>) -> Self {
        self.keys.insert(level, ApiKey::new(key));
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Get the key for an access level.
    pub fn api_key(&self, level: AccessLevel) -> Result<&ApiKey, TornError> {
        self.keys
            .get(&level)
            .ok_or(TornError::MissingApiKey { level })
    }

    /// Configured log verbosity.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut levels: Vec<_> = self.keys.keys().map(|l| l.to_string()).collect();
        levels.sort();
        f.debug_struct("Config")
            .field("keys_for", &levels)
            .field("log_level", &self.log_level)
            .finish()
    }
}
