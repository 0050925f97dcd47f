use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::RawProduct;
use crate::domain::product::status::EXPIRING_SOON_DAYS;
use crate::domain::product::value_objects::{ExpiryStatus, Placement};

pub struct ClassifyProductsParams {
    pub products: Vec<RawProduct>,
    pub as_of: NaiveDate,
}

/// Threshold settings for status classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationPolicy {
    pub expiring_soon_days: i64,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            expiring_soon_days: EXPIRING_SOON_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    pub status: ExpiryStatus,
    pub days_until_expiry: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedProduct {
    pub id: Option<String>,
    pub barcode: String,
    pub placement: Option<Placement>,
    pub outcome: Result<StatusInfo, ProductError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub in_stock: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub entries: Vec<ClassifiedProduct>,
    pub summary: StatusSummary,
}

/// Batch status classification. Never suspends.
pub trait ClassifyProductsUseCase: Send + Sync {
    fn execute(&self, params: ClassifyProductsParams) -> ClassificationReport;
}
