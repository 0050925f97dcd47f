#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.barcode_empty")]
    BarcodeEmpty,
    #[error("product.barcode_invalid")]
    BarcodeInvalid,
    #[error("product.invalid_date")]
    InvalidDate,
}
