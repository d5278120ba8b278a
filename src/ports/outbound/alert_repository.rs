use crate::build_planning::domain::{AlertStatus, ComponentId, InventoryAlert};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// AlertRepository port for inventory alerts
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Records a new alert for the component at the given stock snapshot.
    async fn insert(
        &self,
        component_id: ComponentId,
        current_stock: i64,
        status: AlertStatus,
    ) -> Result<InventoryAlert>;

    /// Returns the open alert with the given status for the component, if
    /// one exists. The tracker uses this to avoid raising the same
    /// condition twice.
    async fn find_unresolved(
        &self,
        component_id: ComponentId,
        status: AlertStatus,
    ) -> Result<Option<InventoryAlert>>;

    /// Marks every open alert for the component as resolved at `at`.
    /// Returns how many alerts were resolved.
    async fn resolve_open(&self, component_id: ComponentId, at: DateTime<Utc>) -> Result<usize>;

    /// Lists all open alerts across the catalog, oldest first.
    async fn list_unresolved(&self) -> Result<Vec<InventoryAlert>>;
}
