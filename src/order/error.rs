use thiserror::Error;

use crate::domain::ProductId;

/// Errors that can occur while editing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("No order line at position {index} (order has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Product {0} is not in the order")]
    ProductNotInOrder(ProductId),
    #[error("Adding {added} more of product {product} overflows its order line")]
    QuantityOverflow { product: ProductId, added: u32 },
    #[error("Order is empty: please add at least one item")]
    EmptyOrder,
}
