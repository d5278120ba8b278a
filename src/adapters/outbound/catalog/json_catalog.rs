use crate::adapters::outbound::memory::InMemoryComponentStore;
use crate::build_planning::domain::{Category, Component, ComponentId, Specifications};
use crate::shared::Result;
use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// One catalog entry as it appears in the JSON file.
///
/// Kept separate from the domain [`Component`] so the file format can stay
/// forgiving (optional stock/reorder fields) while the domain constructor
/// still enforces its invariants.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: u64,
    name: String,
    category: Category,
    price: Decimal,
    #[serde(default)]
    stock: i64,
    #[serde(default = "default_reorder_point")]
    reorder_point: i64,
    #[serde(default = "default_reorder_quantity")]
    reorder_quantity: i64,
    #[serde(default)]
    specifications: Specifications,
}

fn default_reorder_point() -> i64 {
    10
}

fn default_reorder_quantity() -> i64 {
    20
}

/// Loads a component catalog from a JSON file containing an array of
/// records.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or
/// contains a record violating the catalog invariants (empty name,
/// negative price).
pub fn load_catalog(path: &Path) -> Result<Vec<Component>> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read catalog file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let records: Vec<CatalogRecord> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse catalog file: {}\n\n💡 Hint: The catalog must be a JSON array of components with id, name, category and price.",
            path.display()
        )
    })?;

    let mut components = Vec::with_capacity(records.len());
    for record in records {
        let component = Component::new(
            ComponentId(record.id),
            record.name,
            record.category,
            record.price,
        )
        .with_context(|| format!("Invalid catalog record with id {}", record.id))?;
        let mut component = component
            .with_stock(record.stock)
            .with_reorder(record.reorder_point, record.reorder_quantity);
        component.specifications = record.specifications;
        components.push(component);
    }
    Ok(components)
}

/// Loads a catalog file straight into an in-memory component store.
pub fn load_catalog_store(path: &Path) -> Result<InMemoryComponentStore> {
    Ok(InMemoryComponentStore::with_components(load_catalog(path)?))
}
