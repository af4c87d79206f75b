//! Common domain types for the Torn API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::level_filters::LevelFilter;

use crate::error::TornError;

/// Access level of an API key.
///
/// Torn keys are issued per access level, and each level unlocks a different
/// set of selections. The client only uses it to pick which configured key to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Full access
    #[default]
    Full,
    /// Limited access
    Limited,
    /// Minimal access
    Min,
    /// Public data only
    Public,
}

impl AccessLevel {
    /// All access levels, most privileged first.
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Full,
        AccessLevel::Limited,
        AccessLevel::Min,
        AccessLevel::Public,
    ];

    /// Environment variable holding the key for this level.
    pub fn env_var(&self) -> &'static str {
        match self {
            AccessLevel::Full => "TORN_API_KEY_FULL",
            AccessLevel::Limited => "TORN_API_KEY_LIMITED",
            AccessLevel::Min => "TORN_API_KEY_MIN",
            AccessLevel::Public => "TORN_API_KEY_PUBLIC",
        }
    }

    /// Shorter variable name (`Full`, `Limited`, `Min`, `Public`) read when
    /// [`env_var`](Self::env_var) is unset.
    pub fn fallback_env_var(&self) -> &'static str {
        match self {
            AccessLevel::Full => "Full",
            AccessLevel::Limited => "Limited",
            AccessLevel::Min => "Min",
            AccessLevel::Public => "Public",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccessLevel::Full => "full",
            AccessLevel::Limited => "limited",
            AccessLevel::Min => "min",
            AccessLevel::Public => "public",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AccessLevel {
    type Err = TornError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(AccessLevel::Full),
            "limited" => Ok(AccessLevel::Limited),
            "min" | "minimal" => Ok(AccessLevel::Min),
            "public" => Ok(AccessLevel::Public),
            other => Err(TornError::Config(format!("unknown access level '{other}'"))),
        }
    }
}

/// Log verbosity label from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Debug and above
    Debug,
    /// Info and above
    Info,
    /// Warnings and errors
    #[default]
    Warn,
    /// Errors only
    Error,
    /// Nothing
    Off,
}

impl LogLevel {
    /// The filter a subscriber should use for this level.
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.as_level_filter()
    }
}

impl FromStr for LogLevel {
    type Err = TornError;

    /// Accepts both `tracing` names and the logging labels `WARNING` and
    /// `CRITICAL`, as found in `DEBUG_LEVEL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "critical" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(TornError::Config(format!("unknown log level '{other}'"))),
        }
    }
}

/// Response of the `lookup` selection, available on every section.
#[derive(Debug, Clone, Deserialize)]
pub struct Lookup {
    /// Selections the section supports.
    #[serde(default)]
    pub selections: Vec<String>,
}

/// Response of the `timestamp` selection, available on every section.
#[derive(Debug, Clone, Deserialize)]
pub struct Timestamp {
    /// Server time.
    #[serde(with = "time::serde::timestamp")]
    pub timestamp: OffsetDateTime,
}
