use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

static COMPACT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").expect("compact date pattern is valid")
});

/// Calendar date on which a product expires.
///
/// Two textual encodings reach the system: hyphenated ISO (`YYYY-MM-DD`),
/// used for storage and display, and compact (`YYYYMMDD`), used when dates
/// are handed to the language model. Both parse to the same value.
///
/// Serializes as ISO; deserializes through [`ExpirationDate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an expiration date, accepting compact or ISO input.
    ///
    /// Eight digits without separators are rewritten to `YYYY-MM-DD` first;
    /// every other shape is handed to the standard parser unchanged.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let normalized = normalize_compact(raw.trim());
        parse_standard(&normalized)
            .map(Self)
            .ok_or(ProductError::InvalidDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY-MM-DD`
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `YYYYMMDD`
    pub fn to_compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl TryFrom<String> for ExpirationDate {
    type Error = ProductError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ExpirationDate> for String {
    fn from(date: ExpirationDate) -> Self {
        date.to_iso()
    }
}

impl std::str::FromStr for ExpirationDate {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn normalize_compact(raw: &str) -> String {
    match COMPACT_DATE.captures(raw) {
        Some(caps) => format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
        None => raw.to_string(),
    }
}

fn parse_standard(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Opaque product identifier, unique within its owning collection.
///
/// Identifiers are issued by the external document store; locally created
/// products get a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Display status of a product, derived from its expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    InStock,
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryStatus::Expired => write!(f, "expired"),
            ExpiryStatus::ExpiringSoon => write!(f, "expiring_soon"),
            ExpiryStatus::InStock => write!(f, "in_stock"),
        }
    }
}

impl std::str::FromStr for ExpiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expired" => Ok(ExpiryStatus::Expired),
            "expiring_soon" => Ok(ExpiryStatus::ExpiringSoon),
            "in_stock" => Ok(ExpiryStatus::InStock),
            _ => Err(format!("Invalid expiry status: {}", s)),
        }
    }
}

/// Store and aisle a product was listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub store_id: String,
    pub aisle_id: String,
}
