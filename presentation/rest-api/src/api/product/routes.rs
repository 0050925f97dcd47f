use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::classify::{
    ClassifyProductsParams, ClassifyProductsUseCase,
};
use business::domain::product::value_objects::ExpirationDate;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ClassificationReportResponse, ClassifyProductsRequest};
use crate::api::tags::ApiTags;

/// Reference date for a classification request; today (UTC) when absent.
pub(crate) fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate, ProductError> {
    match as_of {
        Some(raw) => ExpirationDate::parse(raw).map(|d| d.date()),
        None => Ok(Utc::now().date_naive()),
    }
}

pub struct ProductApi {
    classify_use_case: Arc<dyn ClassifyProductsUseCase>,
}

impl ProductApi {
    pub fn new(classify_use_case: Arc<dyn ClassifyProductsUseCase>) -> Self {
        Self { classify_use_case }
    }
}

/// Product status API
///
/// Endpoints for classifying shelf products by expiration date.
#[OpenApi]
impl ProductApi {
    /// Classify products
    ///
    /// Returns the expiration status of every product, in input order.
    /// A product with an unreadable date gets an error entry instead of a status.
    #[oai(path = "/products/status", method = "post", tag = "ApiTags::Products")]
    async fn classify_products(
        &self,
        body: Json<ClassifyProductsRequest>,
    ) -> ClassifyProductsResponse {
        let as_of = match resolve_as_of(body.0.as_of.as_deref()) {
            Ok(date) => date,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ClassifyProductsResponse::BadRequest(json);
            }
        };

        let params = ClassifyProductsParams {
            products: body.0.products.into_iter().map(|p| p.into()).collect(),
            as_of,
        };

        let report = self.classify_use_case.execute(params);
        ClassifyProductsResponse::Ok(Json(report.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClassifyProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ClassificationReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
