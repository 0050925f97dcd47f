use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::RawProduct;
use business::domain::product::use_cases::classify::{
    ClassificationReport, ClassifiedProduct, StatusSummary,
};
use business::domain::product::value_objects::{ExpiryStatus, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum ExpiryStatusDto {
    #[oai(rename = "expired")]
    Expired,
    #[oai(rename = "expiring_soon")]
    ExpiringSoon,
    #[oai(rename = "in_stock")]
    InStock,
}

impl From<ExpiryStatus> for ExpiryStatusDto {
    fn from(status: ExpiryStatus) -> Self {
        match status {
            ExpiryStatus::Expired => ExpiryStatusDto::Expired,
            ExpiryStatus::ExpiringSoon => ExpiryStatusDto::ExpiringSoon,
            ExpiryStatus::InStock => ExpiryStatusDto::InStock,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product identifier, generated when absent
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Shelf address
    #[oai(default)]
    pub address: String,
    /// Product barcode
    pub barcode: String,
    /// Units on the shelf
    #[oai(default)]
    pub quantity: u32,
    /// Expiration date, "YYYY-MM-DD" or "YYYYMMDD"
    pub expiration_date: String,
    /// Owning store, when known
    #[oai(skip_serializing_if_is_none)]
    pub store_id: Option<String>,
    /// Owning aisle, when known
    #[oai(skip_serializing_if_is_none)]
    pub aisle_id: Option<String>,
}

impl From<ProductRequest> for RawProduct {
    fn from(req: ProductRequest) -> Self {
        let placement = match (req.store_id, req.aisle_id) {
            (Some(store_id), Some(aisle_id)) => Some(Placement { store_id, aisle_id }),
            _ => None,
        };

        RawProduct {
            id: req.id,
            address: req.address,
            barcode: req.barcode,
            quantity: req.quantity,
            expiration_date: req.expiration_date,
            placement,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ClassifyProductsRequest {
    pub products: Vec<ProductRequest>,
    /// Reference date, defaults to today (UTC)
    #[oai(skip_serializing_if_is_none)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ClassifiedProductResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    pub barcode: String,
    #[oai(skip_serializing_if_is_none)]
    pub store_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub aisle_id: Option<String>,
    /// Absent when the expiration date could not be read
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<ExpiryStatusDto>,
    /// Negative once expired
    #[oai(skip_serializing_if_is_none)]
    pub days_until_expiry: Option<i64>,
    /// Error code for this entry, e.g. "product.invalid_date"
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<ClassifiedProduct> for ClassifiedProductResponse {
    fn from(entry: ClassifiedProduct) -> Self {
        let (store_id, aisle_id) = match entry.placement {
            Some(p) => (Some(p.store_id), Some(p.aisle_id)),
            None => (None, None),
        };
        let (status, days_until_expiry, error) = match entry.outcome {
            Ok(info) => (Some(info.status.into()), Some(info.days_until_expiry), None),
            Err(err) => (None, None, Some(err.to_string())),
        };

        Self {
            id: entry.id,
            barcode: entry.barcode,
            store_id,
            aisle_id,
            status,
            days_until_expiry,
            error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "camelCase")]
pub struct StatusSummaryResponse {
    pub expired: usize,
    pub expiring_soon: usize,
    pub in_stock: usize,
    pub invalid: usize,
}

impl From<StatusSummary> for StatusSummaryResponse {
    fn from(s: StatusSummary) -> Self {
        Self {
            expired: s.expired,
            expiring_soon: s.expiring_soon,
            in_stock: s.in_stock,
            invalid: s.invalid,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClassificationReportResponse {
    pub products: Vec<ClassifiedProductResponse>,
    pub summary: StatusSummaryResponse,
}

impl From<ClassificationReport> for ClassificationReportResponse {
    fn from(report: ClassificationReport) -> Self {
        Self {
            products: report.entries.into_iter().map(|e| e.into()).collect(),
            summary: report.summary.into(),
        }
    }
}
