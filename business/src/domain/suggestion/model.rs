use crate::domain::product::status::EXPIRING_SOON_DAYS;

/// Discount applied to near-expiry items unless the business rules say otherwise.
pub const DEFAULT_DISCOUNT_PERCENT: u8 = 50;

/// Action proposed for one product.
///
/// `barcode` echoes an input product's barcode but is not guaranteed to be
/// unique, nor to match any input at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub barcode: String,
    pub suggested_action: String,
    pub reason: String,
}

/// Free-text policy overrides passed to the model verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessRules(Option<String>);

impl BusinessRules {
    pub fn new(rules: Option<String>) -> Self {
        Self(rules)
    }

    pub fn none() -> Self {
        Self(None)
    }

    /// Rules text, or an empty string when none were supplied.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<Option<String>> for BusinessRules {
    fn from(rules: Option<String>) -> Self {
        Self(rules)
    }
}

impl From<&str> for BusinessRules {
    fn from(rules: &str) -> Self {
        Self(Some(rules.to_string()))
    }
}

/// Default directives the advisory prompt is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryPolicy {
    pub expiring_soon_days: i64,
    pub discount_percent: u8,
}

impl Default for AdvisoryPolicy {
    fn default() -> Self {
        Self {
            expiring_soon_days: EXPIRING_SOON_DAYS,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}
