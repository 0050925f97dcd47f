use std::env;

use business::domain::product::use_cases::classify::ClassificationPolicy;
use business::domain::suggestion::model::AdvisoryPolicy;

/// Expiration thresholds shared by classification and the advisory prompt.
///
/// Environment variables:
/// - EXPIRING_SOON_DAYS: Days (inclusive) a product counts as expiring soon (default: 7)
/// - DISCOUNT_PERCENT: Discount suggested for near-expiry products (default: 50)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryConfig {
    pub expiring_soon_days: i64,
    pub discount_percent: u8,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        let policy = AdvisoryPolicy::default();
        Self {
            expiring_soon_days: policy.expiring_soon_days,
            discount_percent: policy.discount_percent,
        }
    }
}

impl AdvisoryConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("EXPIRING_SOON_DAYS").ok().as_deref(),
            env::var("DISCOUNT_PERCENT").ok().as_deref(),
        )
    }

    fn from_values(expiring_soon_days: Option<&str>, discount_percent: Option<&str>) -> Self {
        let defaults = Self::default();

        let expiring_soon_days = match expiring_soon_days.map(|raw| raw.trim().parse::<i64>()) {
            Some(Ok(days)) if days >= 0 => days,
            Some(_) => {
                tracing::warn!(
                    "Invalid EXPIRING_SOON_DAYS, using default {}",
                    defaults.expiring_soon_days
                );
                defaults.expiring_soon_days
            }
            None => defaults.expiring_soon_days,
        };

        let discount_percent = match discount_percent.map(|raw| raw.trim().parse::<u8>()) {
            Some(Ok(percent)) if percent <= 100 => percent,
            Some(_) => {
                tracing::warn!(
                    "Invalid DISCOUNT_PERCENT, using default {}",
                    defaults.discount_percent
                );
                defaults.discount_percent
            }
            None => defaults.discount_percent,
        };

        Self {
            expiring_soon_days,
            discount_percent,
        }
    }

    pub fn classification_policy(&self) -> ClassificationPolicy {
        ClassificationPolicy {
            expiring_soon_days: self.expiring_soon_days,
        }
    }

    pub fn advisory_policy(&self) -> AdvisoryPolicy {
        AdvisoryPolicy {
            expiring_soon_days: self.expiring_soon_days,
            discount_percent: self.discount_percent,
        }
    }
}
