//! Wish Entity
//!
//! A single wishlist entry as the backend stores it.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque wish identifier.
///
/// json-server hands out numeric ids in older releases and string ids in newer
/// ones, so both are accepted and normalized to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WishId(String);

impl WishId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for WishId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => WishId(text),
            RawId::Number(number) => WishId(number.to_string()),
        })
    }
}

/// Wish data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: WishId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    /// ISO-8601, set once at creation
    pub created_at: String,
}

impl Wish {
    /// Parsed `created_at`, `None` when the backend sent something unreadable
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Staged create/edit input. Never persisted on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishFormData {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl From<&Wish> for WishFormData {
    fn from(wish: &Wish) -> Self {
        Self {
            title: wish.title.clone(),
            description: wish.description.clone(),
            price: wish.price,
            image_url: wish.image_url.clone(),
        }
    }
}

/// POST body for a new wish. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWish {
    #[serde(flatten)]
    pub fields: WishFormData,
    pub created_at: String,
}

impl NewWish {
    pub fn stamped(fields: WishFormData, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at: format_timestamp(now),
        }
    }
}

/// `2026-10-15T09:30:00.000Z`, the shape browsers emit for `toISOString()`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lenient ISO-8601 parsing: full RFC 3339, naive date-time (read as UTC), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
