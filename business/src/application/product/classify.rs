use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::logger::Logger;
use crate::domain::product::model::RawProduct;
use crate::domain::product::status::{classify_with_threshold, days_until_expiry};
use crate::domain::product::use_cases::classify::{
    ClassificationPolicy, ClassificationReport, ClassifiedProduct, ClassifyProductsParams,
    ClassifyProductsUseCase, StatusInfo, StatusSummary,
};
use crate::domain::product::value_objects::{ExpirationDate, ExpiryStatus};

pub struct ClassifyProductsUseCaseImpl {
    pub policy: ClassificationPolicy,
    pub logger: Arc<dyn Logger>,
}

impl ClassifyProductsUseCaseImpl {
    fn classify_one(&self, product: RawProduct, as_of: NaiveDate) -> ClassifiedProduct {
        let outcome = ExpirationDate::parse(&product.expiration_date).map(|expiration| {
            let date = expiration.date();
            StatusInfo {
                status: classify_with_threshold(date, as_of, self.policy.expiring_soon_days),
                days_until_expiry: days_until_expiry(date, as_of),
            }
        });

        if outcome.is_err() {
            self.logger.warn(&format!(
                "Invalid expiration date '{}' for barcode {}",
                product.expiration_date, product.barcode
            ));
        }

        ClassifiedProduct {
            id: product.id,
            barcode: product.barcode,
            placement: product.placement,
            outcome,
        }
    }
}

impl ClassifyProductsUseCase for ClassifyProductsUseCaseImpl {
    fn execute(&self, params: ClassifyProductsParams) -> ClassificationReport {
        self.logger.debug(&format!(
            "Classifying {} products as of {}",
            params.products.len(),
            params.as_of
        ));

        let as_of = params.as_of;
        let entries: Vec<ClassifiedProduct> = params
            .products
            .into_iter()
            .map(|product| self.classify_one(product, as_of))
            .collect();

        let mut summary = StatusSummary::default();
        for entry in &entries {
            match &entry.outcome {
                Ok(info) => match info.status {
                    ExpiryStatus::Expired => summary.expired += 1,
                    ExpiryStatus::ExpiringSoon => summary.expiring_soon += 1,
                    ExpiryStatus::InStock => summary.in_stock += 1,
                },
                Err(_) => summary.invalid += 1,
            }
        }

        self.logger.info(&format!(
            "Classified {} products: expired={}, expiring_soon={}, in_stock={}, invalid={}",
            entries.len(),
            summary.expired,
            summary.expiring_soon,
            summary.in_stock,
            summary.invalid
        ));

        ClassificationReport { entries, summary }
    }
}
