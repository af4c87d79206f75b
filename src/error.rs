//! Error types for the Torn client library.

use thiserror::Error;

use crate::types::AccessLevel;

/// The main error type for all Torn client operations.
#[derive(Error, Debug)]
pub enum TornError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Torn API returned an error body
    #[error("Torn API error: {0}")]
    Api(ApiError),

    /// The API kept answering with the throttling code
    #[error("Rate limited by the API after {attempts} attempts")]
    ThrottleRetriesExhausted {
        /// Number of requests that were sent and throttled
        attempts: u32,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No API key configured for the requested access level
    #[error("API key is required for access level '{level}'")]
    MissingApiKey {
        /// The access level that was requested
        level: AccessLevel,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// An error reported by the Torn API in the response body.
///
/// Torn answers with HTTP 200 and a body of the form
/// `{"error": {"code": 2, "error": "Incorrect key"}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Numeric error code.
    pub code: i64,
    /// The message sent by the API, if any.
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code {}: {}", self.code, self.description())
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Parse the value of a top-level `error` field.
    ///
    /// Returns `None` if the object carries no integer `code`.
    pub fn from_error_value(value: &serde_json::Value) -> Option<Self> {
        let code = value.get("code")?.as_i64()?;
        let message = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        Some(Self::new(code, message))
    }

    /// Human-readable description of the code.
    pub fn description(&self) -> &'static str {
        error_codes::classify(self.code)
    }

    /// Check if this is the throttling error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS
    }

    /// Check if the key itself was rejected.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self.code,
            error_codes::KEY_EMPTY
                | error_codes::INCORRECT_KEY
                | error_codes::KEY_OWNER_IN_JAIL
                | error_codes::KEY_READ_ERROR
                | error_codes::KEY_DISABLED
                | error_codes::KEY_PAUSED
        )
    }

    /// Check if the key lacks the access level for the selection.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self.code,
            error_codes::INCORRECT_ID_ENTITY_RELATION | error_codes::ACCESS_LEVEL_TOO_LOW
        )
    }

    /// Check if the request itself was malformed.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self.code,
            error_codes::WRONG_TYPE | error_codes::WRONG_FIELDS | error_codes::INCORRECT_ID
        )
    }
}

/// Known Torn error codes and their descriptions.
pub mod error_codes {
    pub const UNKNOWN_ERROR: i64 = 0;
    pub const KEY_EMPTY: i64 = 1;
    pub const INCORRECT_KEY: i64 = 2;
    pub const WRONG_TYPE: i64 = 3;
    pub const WRONG_FIELDS: i64 = 4;
    /// The only code the client retries.
    pub const TOO_MANY_REQUESTS: i64 = 5;
    pub const INCORRECT_ID: i64 = 6;
    pub const INCORRECT_ID_ENTITY_RELATION: i64 = 7;
    pub const IP_BLOCK: i64 = 8;
    pub const API_DISABLED: i64 = 9;
    pub const KEY_OWNER_IN_JAIL: i64 = 10;
    pub const KEY_CHANGE_ERROR: i64 = 11;
    pub const KEY_READ_ERROR: i64 = 12;
    pub const KEY_DISABLED: i64 = 13;
    pub const DAILY_READ_LIMIT: i64 = 14;
    pub const TEMPORARY_ERROR: i64 = 15;
    pub const ACCESS_LEVEL_TOO_LOW: i64 = 16;
    pub const BACKEND_ERROR: i64 = 17;
    pub const KEY_PAUSED: i64 = 18;

    /// Fallback for codes outside the table.
    pub const UNKNOWN_CODE_MESSAGE: &str =
        "Unknown error code. Please check the API documentation.";

    /// Map an error code to a description. Total over all integers.
    pub fn classify(code: i64) -> &'static str {
        match code {
            UNKNOWN_ERROR => "Unknown error. An unhandled error has occurred.",
            KEY_EMPTY => "Key is empty. Please provide a valid API key.",
            INCORRECT_KEY => "Incorrect key. The provided API key is invalid.",
            WRONG_TYPE => "Wrong type. The requested type is incorrect.",
            WRONG_FIELDS => "Wrong fields. Invalid selection fields were requested.",
            TOO_MANY_REQUESTS => {
                "Too many requests. Requests are blocked due to exceeding the limit."
            }
            INCORRECT_ID => "Incorrect ID. The ID provided is invalid.",
            INCORRECT_ID_ENTITY_RELATION => {
                "Incorrect ID-entity relation. The requested selection is private."
            }
            IP_BLOCK => "IP block. Your IP has been temporarily banned due to abuse.",
            API_DISABLED => "API disabled. The API system is currently disabled.",
            KEY_OWNER_IN_JAIL => "Key owner is in federal jail. This key cannot be used.",
            KEY_CHANGE_ERROR => {
                "Key change error. You can only change your API key once every 60 seconds."
            }
            KEY_READ_ERROR => {
                "Key read error. There was an error reading the key from the database."
            }
            KEY_DISABLED => "The key is temporarily disabled due to inactivity.",
            DAILY_READ_LIMIT => "Daily read limit reached. You have exceeded your daily quota.",
            TEMPORARY_ERROR => "Temporary error. An error code for testing purposes.",
            ACCESS_LEVEL_TOO_LOW => {
                "Access level of this key is not high enough. You do not have permission to access this data."
            }
            BACKEND_ERROR => "Backend error occurred. Please try again.",
            KEY_PAUSED => "API key is paused. The API key is currently inactive.",
            _ => UNKNOWN_CODE_MESSAGE,
        }
    }
}
