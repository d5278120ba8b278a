use async_trait::async_trait;
use rigforge::build_planning::domain::PricePoint;
use rigforge::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Mock ComponentRepository for testing
pub struct MockComponentRepository {
    pub components: HashMap<ComponentId, Component>,
    pub should_fail: bool,
}

impl MockComponentRepository {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.insert(component.id, component);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            components: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockComponentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentRepository for MockComponentRepository {
    async fn get(&self, id: ComponentId) -> Result<Component> {
        if self.should_fail {
            anyhow::bail!("Mock component repository failure");
        }
        self.components
            .get(&id)
            .cloned()
            .ok_or_else(|| ForgeError::ComponentNotFound { id }.into())
    }

    async fn list_excluding(&self, ids: &[ComponentId]) -> Result<Vec<Component>> {
        if self.should_fail {
            anyhow::bail!("Mock component repository failure");
        }
        let mut components: Vec<Component> = self
            .components
            .values()
            .filter(|component| !ids.contains(&component.id))
            .cloned()
            .collect();
        components.sort_by_key(|component| component.id);
        Ok(components)
    }

    async fn update_price(&self, _id: ComponentId, _price: Decimal) -> Result<Component> {
        anyhow::bail!("Mock component repository does not support price updates");
    }

    async fn update_stock(&self, _id: ComponentId, _stock: i64) -> Result<Component> {
        anyhow::bail!("Mock component repository does not support stock updates");
    }

    async fn price_history(&self, _id: ComponentId) -> Result<Vec<PricePoint>> {
        Ok(Vec::new())
    }
}
