/// A customer resolved from a valid customer number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub past_orders: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, past_orders: u32) -> Self {
        Self {
            name: name.into(),
            past_orders,
        }
    }
}
