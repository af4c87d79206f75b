//! Custom serde helpers for Torn's loosely typed JSON.
//!
//! Torn encodes flags as `0`/`1`, sends some rates as strings and others as
//! numbers, and uses `""` where other APIs would send `null`.

use std::fmt;

use serde::{de, Deserialize, Deserializer};

/// Deserialize a flag sent as `0`/`1` or as a JSON boolean.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use torn_api_client::types::serde_helpers::bool_from_int;
///
/// #[derive(Deserialize)]
/// struct Ammo {
///     #[serde(deserialize_with = "bool_from_int::deserialize")]
///     equipped: bool,
/// }
///
/// let ammo: Ammo = serde_json::from_str(r#"{"equipped":1}"#).unwrap();
/// assert!(ammo.equipped);
/// ```
pub mod bool_from_int {
    use super::*;

    /// Deserialize `0`, `1`, `true` or `false` into a bool.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl de::Visitor<'_> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("0, 1 or a boolean")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    0 => Ok(false),
                    1 => Ok(true),
                    other => Err(de::Error::custom(format!("expected 0 or 1, got {other}"))),
                }
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v)
                    .map_err(|_| de::Error::custom(format!("expected 0 or 1, got {v}")))
                    .and_then(|v| self.visit_u64(v))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

/// Deserialize an `f64` sent either as a number or as a numeric string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use torn_api_client::types::serde_helpers::number_or_string;
///
/// #[derive(Deserialize)]
/// struct Rate {
///     #[serde(deserialize_with = "number_or_string::deserialize")]
///     value: f64,
/// }
///
/// let a: Rate = serde_json::from_str(r#"{"value":"0.75"}"#).unwrap();
/// let b: Rate = serde_json::from_str(r#"{"value":0.75}"#).unwrap();
/// assert_eq!(a.value, b.value);
/// ```
pub mod number_or_string {
    use super::*;

    /// Deserialize a number or numeric string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl de::Visitor<'_> for NumberVisitor {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or numeric string")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v as f64)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v as f64)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.trim().parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use torn_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Status {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     details: Option<String>,
/// }
///
/// let status: Status = serde_json::from_str(r#"{"details":""}"#).unwrap();
/// assert!(status.details.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
