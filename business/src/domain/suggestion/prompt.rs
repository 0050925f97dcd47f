use crate::domain::product::model::Product;

use super::model::{AdvisoryPolicy, BusinessRules};

const PRODUCT_LINE_FORMAT: &str = "barcode, expirationDate (YYYYMMDD), quantity";

/// Control characters in free text would break the one-product-per-line layout.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Builds the advisory prompt.
///
/// Deterministic: the same products, rules and policy always produce the same
/// text. Dates are written in compact form regardless of how they are stored.
pub fn build_prompt(products: &[Product], rules: &BusinessRules, policy: &AdvisoryPolicy) -> String {
    let product_list = products
        .iter()
        .map(|p| {
            format!(
                "{}, {}, {}",
                single_line(&p.barcode),
                p.expiration_date.to_compact(),
                p.quantity
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an inventory assistant for a retail store. Review the products below and suggest what to do with the ones close to or past their expiration date.

PRODUCTS ({format}):
{product_list}

BUSINESS RULES:
{rules}

Directives:
- Suggest a {discount}% discount for products expiring within {days} days.
- Suggest removing from the shelf any product that has already expired.
- Follow the business rules above; they override these defaults when they conflict.

Return one entry per product that needs action, each with "barcode", "suggestedAction" and "reason"."#,
        format = PRODUCT_LINE_FORMAT,
        product_list = product_list,
        rules = rules.as_str(),
        discount = policy.discount_percent,
        days = policy.expiring_soon_days.max(0),
    )
}
