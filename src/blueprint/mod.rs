//! Persisted order templates.

pub mod error;
mod store;

pub use error::*;
pub use store::*;

use tracing::{debug, info, instrument, warn};

use crate::catalog::Catalog;
use crate::domain::{Blueprint, OrderLine, ProductId};

/// Key under which the blueprint list is stored.
pub const BLUEPRINTS_KEY: &str = "blueprints";

/// The ordered list of saved blueprints, kept as one JSON value.
///
/// Every write loads the full list, changes it, and stores it back; there is
/// no protection against concurrent writers.
pub struct BlueprintStore {
    store: Box<dyn KeyValueStore>,
}

impl BlueprintStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Loads all blueprints. A missing or unparsable value reads as an
    /// empty list.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<Vec<Blueprint>, BlueprintError> {
        let Some(raw) = self.store.get(BLUEPRINTS_KEY)? else {
            debug!("No blueprints stored");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Blueprint>>(&raw) {
            Ok(blueprints) => {
                debug!(count = blueprints.len(), "Blueprints loaded");
                Ok(blueprints)
            }
            Err(e) => {
                warn!(error = %e, "Stored blueprints are malformed, ignoring them");
                Ok(Vec::new())
            }
        }
    }

    pub fn get(&self, index: usize) -> Result<Blueprint, BlueprintError> {
        self.load()?
            .into_iter()
            .nth(index)
            .ok_or(BlueprintError::NotFound(index))
    }

    /// Appends `blueprint` to the stored list.
    #[instrument(skip(self, blueprint), fields(blueprint_name = %blueprint.name))]
    pub fn append(&mut self, blueprint: Blueprint) -> Result<(), BlueprintError> {
        let mut blueprints = self.load()?;
        blueprints.push(blueprint);
        self.save(&blueprints)?;
        info!(count = blueprints.len(), "Blueprint saved");
        Ok(())
    }

    fn save(&mut self, blueprints: &[Blueprint]) -> Result<(), BlueprintError> {
        let raw = serde_json::to_string(blueprints)
            .map_err(|e| BlueprintError::Serialization(e.to_string()))?;
        self.store.set(BLUEPRINTS_KEY, raw)
    }
}

/// Order lines rebuilt from a blueprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlueprint {
    pub lines: Vec<OrderLine>,
    /// Ids that were skipped: unknown to the catalog or stored with a zero
    /// amount.
    pub dropped: Vec<ProductId>,
}

/// Resolves a blueprint's product ids against `catalog`, dropping lines that
/// no longer resolve.
#[instrument(skip(blueprint, catalog), fields(blueprint_name = %blueprint.name))]
pub fn resolve(blueprint: &Blueprint, catalog: &Catalog) -> ResolvedBlueprint {
    let mut lines = Vec::with_capacity(blueprint.lines.len());
    let mut dropped = Vec::new();

    for line in &blueprint.lines {
        match catalog.get(line.id) {
            Some(product) if line.amount > 0 => lines.push(OrderLine {
                product: product.clone(),
                quantity: line.amount,
            }),
            Some(_) => {
                warn!(product_id = %line.id, "Dropping blueprint line with zero amount");
                dropped.push(line.id);
            }
            None => {
                warn!(product_id = %line.id, "Dropping blueprint line for unknown product");
                dropped.push(line.id);
            }
        }
    }

    ResolvedBlueprint { lines, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlueprintLine;
    use crate::order::OrderDraft;

    fn line(id: u32, amount: u32) -> BlueprintLine {
        BlueprintLine {
            id: ProductId(id),
            amount,
        }
    }

    #[test]
    fn test_empty_when_absent() {
        let store = BlueprintStore::in_memory();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_value_reads_as_empty() {
        let mut backend = MemoryStore::new();
        backend.set(BLUEPRINTS_KEY, "{not json".to_string()).unwrap();
        let store = BlueprintStore::new(backend);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = BlueprintStore::in_memory();
        store.append(Blueprint::new("first", vec![line(1, 1)])).unwrap();
        store.append(Blueprint::new("second", vec![line(5, 2)])).unwrap();

        let names: Vec<_> = store.load().unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.get(1).unwrap().lines, vec![line(5, 2)]);
        assert_eq!(store.get(2), Err(BlueprintError::NotFound(2)));
    }

    #[test]
    fn test_reads_stored_format() {
        let mut backend = MemoryStore::new();
        backend
            .set(
                BLUEPRINTS_KEY,
                r#"[{"name":"Blueprint #4821","orderLines":[{"id":1,"amount":1},{"id":7,"amount":2}]}]"#
                    .to_string(),
            )
            .unwrap();
        let store = BlueprintStore::new(backend);
        let blueprints = store.load().unwrap();
        assert_eq!(blueprints.len(), 1);
        assert_eq!(blueprints[0].name, "Blueprint #4821");
        assert_eq!(blueprints[0].lines, vec![line(1, 1), line(7, 2)]);
    }

    #[test]
    fn test_round_trip_through_catalog() {
        let catalog = Catalog::breakfast();
        let mut draft = OrderDraft::for_selection(catalog.get(ProductId(2)).unwrap());
        draft.add_item(catalog.get(ProductId(5)).unwrap(), 2).unwrap();
        draft.add_item(catalog.get(ProductId(7)).unwrap(), 1).unwrap();

        let mut store = BlueprintStore::in_memory();
        store
            .append(Blueprint::new("mine", draft.blueprint_lines()))
            .unwrap();

        let resolved = resolve(&store.get(0).unwrap(), &catalog);
        assert!(resolved.dropped.is_empty());
        assert_eq!(OrderDraft::from_lines(resolved.lines).unwrap(), draft);
    }

    #[test]
    fn test_unknown_products_are_dropped() {
        let catalog = Catalog::breakfast();
        let blueprint = Blueprint::new("stale", vec![line(42, 1), line(4, 2), line(6, 0)]);

        let resolved = resolve(&blueprint, &catalog);
        let shape: Vec<_> = resolved
            .lines
            .iter()
            .map(|l| (l.product.id.0, l.quantity))
            .collect();
        assert_eq!(shape, vec![(4, 2)]);
        assert_eq!(resolved.dropped, vec![ProductId(42), ProductId(6)]);
    }

    #[test]
    fn test_file_backed_store_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = BlueprintStore::new(FileStore::new(tmp.path()));
        store.append(Blueprint::new("saved", vec![line(3, 1)])).unwrap();

        let reopened = BlueprintStore::new(FileStore::new(tmp.path()));
        assert_eq!(reopened.load().unwrap(), vec![Blueprint::new("saved", vec![line(3, 1)])]);
    }
}
