use serde::{Deserialize, Serialize};

use super::product::ProductId;

/// A saved order shape that can be replayed into a new order.
///
/// Only product ids and amounts are stored, so a blueprint stays meaningful
/// when catalog prices change. The serialized field names match the
/// `blueprints` storage format (`orderLines`, `id`, `amount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    #[serde(rename = "orderLines")]
    pub lines: Vec<BlueprintLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintLine {
    pub id: ProductId,
    pub amount: u32,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, lines: Vec<BlueprintLine>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Default name for a blueprint created at `timestamp_millis`: the last
    /// four digits of the timestamp.
    pub fn default_name(timestamp_millis: u128) -> String {
        format!("Blueprint #{:04}", timestamp_millis % 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_uses_last_four_digits() {
        assert_eq!(Blueprint::default_name(1_718_000_123_456), "Blueprint #3456");
        assert_eq!(Blueprint::default_name(1_718_000_120_042), "Blueprint #0042");
    }

    #[test]
    fn test_serialized_shape() {
        let blueprint = Blueprint::new(
            "Blueprint #0001",
            vec![BlueprintLine { id: ProductId(1), amount: 2 }],
        );
        let json = serde_json::to_string(&blueprint).unwrap();
        assert_eq!(json, r#"{"name":"Blueprint #0001","orderLines":[{"id":1,"amount":2}]}"#);
    }
}
