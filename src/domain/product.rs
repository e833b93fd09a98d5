use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a product may start an order.
///
/// A `Prepackaged` product is a complete breakfast and seeds the order with
/// itself; a `Simple` product is an add-on the customer picks explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Prepackaged,
    Simple,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Prepackaged => write!(f, "prepackaged"),
            Category::Simple => write!(f, "simple"),
        }
    }
}

/// Represents an entry in the product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub calories: u32,
    pub price: Decimal,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        calories: u32,
        price: Decimal,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category,
            calories,
            price,
        }
    }

    pub fn is_prepackaged(&self) -> bool {
        self.category == Category::Prepackaged
    }
}
