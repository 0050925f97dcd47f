use chrono::{DateTime, NaiveDate, Utc};

use super::errors::ProductError;
use super::value_objects::{ExpirationDate, ExpiryStatus};

/// Products expiring within this many days (inclusive) count as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Whole calendar days from `as_of` until `expiration`.
///
/// Returns 0 for products expiring on `as_of`, negative once expired.
pub fn days_until_expiry(expiration: NaiveDate, as_of: NaiveDate) -> i64 {
    (expiration - as_of).num_days()
}

/// Classifies a product by its expiration date.
///
/// Business rules, evaluated in order:
/// - Expiration before `as_of` -> Expired
/// - Expiration within 7 days, both ends inclusive -> ExpiringSoon
/// - Anything later -> InStock
pub fn classify(expiration: NaiveDate, as_of: NaiveDate) -> ExpiryStatus {
    classify_with_threshold(expiration, as_of, EXPIRING_SOON_DAYS)
}

/// Same rule as [`classify`] with a caller-chosen threshold.
/// Negative thresholds behave as 0.
pub fn classify_with_threshold(
    expiration: NaiveDate,
    as_of: NaiveDate,
    expiring_soon_days: i64,
) -> ExpiryStatus {
    let days = days_until_expiry(expiration, as_of);

    if days < 0 {
        return ExpiryStatus::Expired;
    }

    if days <= expiring_soon_days.max(0) {
        return ExpiryStatus::ExpiringSoon;
    }

    ExpiryStatus::InStock
}

/// Classifies against an instant; the time of day is discarded first.
pub fn classify_at(expiration: NaiveDate, now: DateTime<Utc>) -> ExpiryStatus {
    classify(expiration, now.date_naive())
}

/// Parses a textual expiration date (ISO or compact) and classifies it.
pub fn classify_raw(raw_expiration: &str, as_of: NaiveDate) -> Result<ExpiryStatus, ProductError> {
    let expiration = ExpirationDate::parse(raw_expiration)?;
    Ok(classify(expiration.date(), as_of))
}
