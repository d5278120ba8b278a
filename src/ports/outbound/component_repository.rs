use crate::build_planning::domain::{Component, ComponentId, PricePoint};
use crate::shared::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// ComponentRepository port for catalog access
///
/// This port abstracts the storage collaborator holding the component
/// catalog. Reads return a snapshot: the price/stock observed at call time
/// is threaded through by the caller rather than re-read later, so a
/// concurrent catalog update cannot change a value mid-operation.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Fetches a single component by id
    ///
    /// # Errors
    /// Returns [`ForgeError::ComponentNotFound`](crate::shared::ForgeError)
    /// for an unknown id.
    async fn get(&self, id: ComponentId) -> Result<Component>;

    /// Lists every component except the given ids, used to compute the set
    /// of candidate compatible components for an in-progress build.
    async fn list_excluding(&self, ids: &[ComponentId]) -> Result<Vec<Component>>;

    /// Persists a new catalog price and records a price-history point.
    ///
    /// Historical builds keep their frozen `price_at_time`; only future
    /// validations see the new price.
    async fn update_price(&self, id: ComponentId, price: Decimal) -> Result<Component>;

    /// Persists a new stock level.
    async fn update_stock(&self, id: ComponentId, stock: i64) -> Result<Component>;

    /// Returns the recorded price history, oldest first.
    async fn price_history(&self, id: ComponentId) -> Result<Vec<PricePoint>>;
}

// Lets use cases share one store without an extra indirection layer.
#[async_trait]
impl<T: ComponentRepository + ?Sized> ComponentRepository for Arc<T> {
    async fn get(&self, id: ComponentId) -> Result<Component> {
        (**self).get(id).await
    }

    async fn list_excluding(&self, ids: &[ComponentId]) -> Result<Vec<Component>> {
        (**self).list_excluding(ids).await
    }

    async fn update_price(&self, id: ComponentId, price: Decimal) -> Result<Component> {
        (**self).update_price(id, price).await
    }

    async fn update_stock(&self, id: ComponentId, stock: i64) -> Result<Component> {
        (**self).update_stock(id, stock).await
    }

    async fn price_history(&self, id: ComponentId) -> Result<Vec<PricePoint>> {
        (**self).price_history(id).await
    }
}
