//! Max-price lookup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The product with the highest price, `None` for empty input.
///
/// Ties resolve to the first maximal product in input order.
pub fn get_most_expensive_product(products: &[Product]) -> Option<&Product> {
    products.iter().fold(None, |best, product| match best {
        Some(current) if product.price <= current.price => Some(current),
        _ => Some(product),
    })
}
