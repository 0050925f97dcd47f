use poem_openapi::Object;

use business::domain::store::model::{Aisle, Store};

use crate::api::product::dto::ProductRequest;

#[derive(Debug, Clone, Object)]
pub struct AisleRequest {
    pub id: String,
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub products: Vec<ProductRequest>,
}

impl From<AisleRequest> for Aisle {
    fn from(req: AisleRequest) -> Self {
        Aisle {
            id: req.id,
            name: req.name,
            products: req.products.into_iter().map(|p| p.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StoreRequest {
    pub id: String,
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub aisles: Vec<AisleRequest>,
}

impl From<StoreRequest> for Store {
    fn from(req: StoreRequest) -> Self {
        Store {
            id: req.id,
            name: req.name,
            aisles: req.aisles.into_iter().map(|a| a.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ClassifyStoresRequest {
    pub stores: Vec<StoreRequest>,
    /// Reference date, defaults to today (UTC)
    #[oai(skip_serializing_if_is_none)]
    pub as_of: Option<String>,
}
