//! Field helpers for API values that come back as `null` or malformed where
//! the page would rather show a default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// `null` becomes `T::default()`. Pair with `#[serde(default)]` for missing fields.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A timestamp that is not RFC 3339 is treated as absent.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}
