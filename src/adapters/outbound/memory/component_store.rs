use crate::build_planning::domain::{Component, ComponentId, PricePoint};
use crate::ports::outbound::ComponentRepository;
use crate::shared::{ForgeError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;

/// In-memory ComponentRepository backed by a concurrent map.
///
/// Serves as the storage stand-in for tests and the demo CLI; a production
/// deployment plugs a database-backed implementation into the same port.
/// Price updates record a history point so price trends stay auditable.
#[derive(Default)]
pub struct InMemoryComponentStore {
    components: DashMap<ComponentId, Component>,
    price_history: DashMap<ComponentId, Vec<PricePoint>>,
}

impl InMemoryComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given catalog.
    pub fn with_components(components: Vec<Component>) -> Self {
        let store = Self::new();
        for component in components {
            store.insert(component);
        }
        store
    }

    /// Inserts or replaces a catalog entry.
    pub fn insert(&self, component: Component) {
        self.components.insert(component.id, component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[async_trait]
impl ComponentRepository for InMemoryComponentStore {
    async fn get(&self, id: ComponentId) -> Result<Component> {
        self.components
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| ForgeError::ComponentNotFound { id }.into())
    }

    async fn list_excluding(&self, ids: &[ComponentId]) -> Result<Vec<Component>> {
        let mut components: Vec<Component> = self
            .components
            .iter()
            .filter(|entry| !ids.contains(entry.key()))
            .map(|entry| entry.clone())
            .collect();
        // DashMap iteration order is arbitrary; keep listings deterministic.
        components.sort_by_key(|c| c.id);
        Ok(components)
    }

    async fn update_price(&self, id: ComponentId, price: Decimal) -> Result<Component> {
        let mut entry = self
            .components
            .get_mut(&id)
            .ok_or(ForgeError::ComponentNotFound { id })?;
        entry.price = price;
        let updated = entry.clone();
        drop(entry);

        self.price_history.entry(id).or_default().push(PricePoint {
            price,
            recorded_at: Utc::now(),
        });
        Ok(updated)
    }

    async fn update_stock(&self, id: ComponentId, stock: i64) -> Result<Component> {
        let mut entry = self
            .components
            .get_mut(&id)
            .ok_or(ForgeError::ComponentNotFound { id })?;
        entry.stock = stock;
        Ok(entry.clone())
    }

    async fn price_history(&self, id: ComponentId) -> Result<Vec<PricePoint>> {
        Ok(self
            .price_history
            .get(&id)
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }
}
