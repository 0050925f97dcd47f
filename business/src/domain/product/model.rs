use super::errors::ProductError;
use super::value_objects::{ExpirationDate, Placement, ProductId};

/// A product on a shelf.
///
/// `id` is fixed at construction; quantity and expiration date may change.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    pub address: String,
    pub barcode: String,
    pub quantity: u32,
    pub expiration_date: ExpirationDate,
    pub placement: Option<Placement>,
}

pub struct NewProductProps {
    pub address: String,
    pub barcode: String,
    pub quantity: u32,
    pub expiration_date: ExpirationDate,
    pub placement: Option<Placement>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::with_id(ProductId::generate(), props)
    }

    /// Builds a product under an identifier issued elsewhere.
    pub fn with_id(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        if props.barcode.trim().is_empty() {
            return Err(ProductError::BarcodeEmpty);
        }
        if props.barcode.chars().any(char::is_control) {
            return Err(ProductError::BarcodeInvalid);
        }

        Ok(Self {
            id,
            address: props.address.trim().to_string(),
            barcode: props.barcode.trim().to_string(),
            quantity: props.quantity,
            expiration_date: props.expiration_date,
            placement: props.placement,
        })
    }

    /// Constructor for records already held by the external store (no validation).
    pub fn from_repository(
        id: ProductId,
        address: String,
        barcode: String,
        quantity: u32,
        expiration_date: ExpirationDate,
        placement: Option<Placement>,
    ) -> Self {
        Self {
            id,
            address,
            barcode,
            quantity,
            expiration_date,
            placement,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }
}

/// A product as it arrives from a caller, with the expiration date still in
/// its textual form.
///
/// Kept separate from [`Product`] so that an unparseable date can be
/// reported per product instead of rejecting a whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProduct {
    pub id: Option<String>,
    pub address: String,
    pub barcode: String,
    pub quantity: u32,
    pub expiration_date: String,
    pub placement: Option<Placement>,
}

impl RawProduct {
    pub fn into_product(self) -> Result<Product, ProductError> {
        let expiration_date = ExpirationDate::parse(&self.expiration_date)?;
        let props = NewProductProps {
            address: self.address,
            barcode: self.barcode,
            quantity: self.quantity,
            expiration_date,
            placement: self.placement,
        };

        match self.id {
            Some(id) => Product::with_id(ProductId::new(id), props),
            None => Product::new(props),
        }
    }
}
