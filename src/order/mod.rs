//! Order lines and totals.

pub mod error;

pub use error::*;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::domain::{BlueprintLine, OrderLine, Product, ProductId, Totals};

/// Sums calories and price over `lines`.
pub fn compute_totals<'a>(lines: impl IntoIterator<Item = &'a OrderLine>) -> Totals {
    lines.into_iter().fold(Totals::default(), |totals, line| Totals {
        total_calories: totals.total_calories + line.calories(),
        total_price: totals.total_price + line.price(),
    })
}

/// An order being assembled.
///
/// Lines are keyed by product id and kept in insertion order, so a product
/// appears at most once and positions stay stable for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    lines: IndexMap<ProductId, OrderLine>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an order from a catalog selection.
    ///
    /// A prepackaged product is itself the order: one line, quantity 1. A
    /// simple product starts an empty order.
    pub fn for_selection(product: &Product) -> Self {
        let mut draft = Self::new();
        if product.is_prepackaged() {
            draft.lines.insert(
                product.id,
                OrderLine {
                    product: product.clone(),
                    quantity: 1,
                },
            );
        }
        draft
    }

    /// Builds a draft from existing lines, merging repeated products and
    /// skipping zero quantities.
    pub fn from_lines(lines: impl IntoIterator<Item = OrderLine>) -> Result<Self, OrderError> {
        let mut draft = Self::new();
        for line in lines.into_iter().filter(|line| line.quantity > 0) {
            draft.add_item(&line.product, line.quantity)?;
        }
        Ok(draft)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<&OrderLine, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let line: &OrderLine = match self.lines.entry(product.id) {
            Entry::Occupied(entry) => {
                let line = entry.into_mut();
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(OrderError::QuantityOverflow {
                        product: product.id,
                        added: quantity,
                    })?;
                line
            }
            Entry::Vacant(entry) => entry.insert(OrderLine {
                product: product.clone(),
                quantity,
            }),
        };
        debug!(product_id = %product.id, quantity = line.quantity, "Order line updated");
        Ok(line)
    }

    /// Removes the whole line at `index`; later lines shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<OrderLine, OrderError> {
        let len = self.lines.len();
        self.lines
            .shift_remove_index(index)
            .map(|(_, line)| line)
            .ok_or(OrderError::IndexOutOfRange { index, len })
    }

    /// Removes the whole line for `id`.
    pub fn remove_product(&mut self, id: ProductId) -> Result<OrderLine, OrderError> {
        self.lines
            .shift_remove(&id)
            .ok_or(OrderError::ProductNotInOrder(id))
    }

    /// Removes one unit of `id`. Returns the remaining line, or `None` when
    /// the last unit was taken and the line dropped.
    pub fn remove_one(&mut self, id: ProductId) -> Result<Option<&OrderLine>, OrderError> {
        let quantity = self
            .lines
            .get(&id)
            .map(|line| line.quantity)
            .ok_or(OrderError::ProductNotInOrder(id))?;

        if quantity <= 1 {
            self.lines.shift_remove(&id);
            return Ok(None);
        }

        if let Some(line) = self.lines.get_mut(&id) {
            line.quantity -= 1;
        }
        Ok(self.lines.get(&id))
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &OrderLine> {
        self.lines.values()
    }

    pub fn get(&self, id: ProductId) -> Option<&OrderLine> {
        self.lines.get(&id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn totals(&self) -> Totals {
        compute_totals(self.lines.values())
    }

    /// The (product id, quantity) shape of this order, for saving as a
    /// blueprint.
    pub fn blueprint_lines(&self) -> Vec<BlueprintLine> {
        self.lines
            .values()
            .map(|line| BlueprintLine {
                id: line.product.id,
                amount: line.quantity,
            })
            .collect()
    }
}
