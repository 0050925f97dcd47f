use crate::domain::product::model::RawProduct;
use crate::domain::product::value_objects::Placement;

#[derive(Debug, Clone, PartialEq)]
pub struct Aisle {
    pub id: String,
    pub name: String,
    pub products: Vec<RawProduct>,
}

/// A store with its aisles, as the inventory screens nest them.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub aisles: Vec<Aisle>,
}

impl Store {
    /// Lists every product of the store, tagged with its store and aisle.
    ///
    /// Order follows aisle order, then product order within each aisle.
    /// Any placement already present on a product is overwritten.
    pub fn flatten(&self) -> Vec<RawProduct> {
        self.aisles
            .iter()
            .flat_map(|aisle| {
                aisle.products.iter().map(move |product| RawProduct {
                    placement: Some(Placement {
                        store_id: self.id.clone(),
                        aisle_id: aisle.id.clone(),
                    }),
                    ..product.clone()
                })
            })
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.aisles.iter().map(|a| a.products.len()).sum()
    }
}

/// Flattens several stores, keeping store order.
pub fn flatten_stores(stores: &[Store]) -> Vec<RawProduct> {
    stores.iter().flat_map(Store::flatten).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(barcode: &str) -> RawProduct {
        RawProduct {
            id: Some(format!("p-{}", barcode)),
            address: "shelf".to_string(),
            barcode: barcode.to_string(),
            quantity: 1,
            expiration_date: "2024-01-01".to_string(),
            placement: None,
        }
    }

    fn store(id: &str, aisles: Vec<(&str, Vec<&str>)>) -> Store {
        Store {
            id: id.to_string(),
            name: format!("Store {}", id),
            aisles: aisles
                .into_iter()
                .map(|(aisle_id, barcodes)| Aisle {
                    id: aisle_id.to_string(),
                    name: format!("Aisle {}", aisle_id),
                    products: barcodes.into_iter().map(raw).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn should_tag_every_product_with_store_and_aisle() {
        let store = store("s1", vec![("a1", vec!["1", "2"]), ("a2", vec!["3"])]);

        let products = store.flatten();

        let tags: Vec<_> = products
            .iter()
            .map(|p| {
                let placement = p.placement.as_ref().unwrap();
                (
                    p.barcode.as_str(),
                    placement.store_id.as_str(),
                    placement.aisle_id.as_str(),
                )
            })
            .collect();
        assert_eq!(
            tags,
            vec![("1", "s1", "a1"), ("2", "s1", "a1"), ("3", "s1", "a2")]
        );
        assert_eq!(store.product_count(), 3);
    }

    #[test]
    fn should_return_nothing_for_store_without_aisles() {
        let store = store("empty", vec![]);
        assert!(store.flatten().is_empty());
    }

    #[test]
    fn should_keep_store_order_when_flattening_many() {
        let stores = vec![
            store("s1", vec![("a1", vec!["1"])]),
            store("s2", vec![("a1", vec!["2"]), ("a9", vec![])]),
        ];

        let barcodes: Vec<_> = flatten_stores(&stores)
            .into_iter()
            .map(|p| (p.barcode, p.placement.unwrap().store_id))
            .collect();
        assert_eq!(
            barcodes,
            vec![
                ("1".to_string(), "s1".to_string()),
                ("2".to_string(), "s2".to_string())
            ]
        );
    }
}
