use std::collections::HashMap;

use crate::domain::Customer;

/// Static lookup table from 8-digit customer number to customer record.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: HashMap<String, Customer>,
}

impl CustomerDirectory {
    pub fn new(entries: impl IntoIterator<Item = (String, Customer)>) -> Self {
        Self {
            customers: entries.into_iter().collect(),
        }
    }

    /// The customers known to the breakfast service.
    pub fn demo() -> Self {
        Self::new([
            ("38429730".to_string(), Customer::new("Anna Meier", 12)),
            ("12345678".to_string(), Customer::new("Max Mustermann", 3)),
        ])
    }

    pub fn get(&self, number: &str) -> Option<&Customer> {
        self.customers.get(number)
    }
}
