use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::classify::{
    ClassifyProductsParams, ClassifyProductsUseCase,
};
use business::domain::store::model::{Store, flatten_stores};

use crate::api::error::IntoErrorResponse;
use crate::api::product::routes::{ClassifyProductsResponse, resolve_as_of};
use crate::api::store::dto::ClassifyStoresRequest;
use crate::api::tags::ApiTags;

pub struct StoreApi {
    classify_use_case: Arc<dyn ClassifyProductsUseCase>,
}

impl StoreApi {
    pub fn new(classify_use_case: Arc<dyn ClassifyProductsUseCase>) -> Self {
        Self { classify_use_case }
    }
}

/// Store status API
#[OpenApi]
impl StoreApi {
    /// Classify store inventory
    ///
    /// Flattens stores and aisles into one product list, tags each product
    /// with its store and aisle, then classifies it.
    #[oai(path = "/stores/status", method = "post", tag = "ApiTags::Stores")]
    async fn classify_stores(&self, body: Json<ClassifyStoresRequest>) -> ClassifyProductsResponse {
        let as_of = match resolve_as_of(body.0.as_of.as_deref()) {
            Ok(date) => date,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ClassifyProductsResponse::BadRequest(json);
            }
        };

        let stores: Vec<Store> = body.0.stores.into_iter().map(|s| s.into()).collect();
        let params = ClassifyProductsParams {
            products: flatten_stores(&stores),
            as_of,
        };

        let report = self.classify_use_case.execute(params);
        ClassifyProductsResponse::Ok(Json(report.into()))
    }
}
