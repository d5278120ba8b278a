use crate::build_planning::domain::{Component, ComponentId, PricePoint};
use crate::ports::outbound::ComponentRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::time::{Duration, Instant};

/// Default time-to-live for cached component snapshots (one hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct CachedComponent {
    component: Component,
    fetched_at: Instant,
}

/// CachingComponentRepository wraps a ComponentRepository and adds an
/// in-memory read-through cache with a fixed TTL.
///
/// This adapter implements the decorator pattern: the use cases only see
/// the ComponentRepository port, and whether a snapshot came from the cache
/// or the backing store is transparent to them. Entries are invalidated on
/// price/stock writes going through this decorator; staleness within the
/// TTL for writes that bypass it is tolerated by design, not a correctness
/// bug.
pub struct CachingComponentRepository<R: ComponentRepository> {
    inner: R,
    cache: DashMap<ComponentId, CachedComponent>,
    ttl: Duration,
}

impl<R: ComponentRepository> CachingComponentRepository<R> {
    /// Creates a caching repository with the default one-hour TTL.
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    /// Creates a caching repository with an explicit TTL.
    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
            ttl,
        }
    }

    /// Explicit invalidation hook for callers that mutate the catalog
    /// outside this decorator.
    pub fn invalidate(&self, id: ComponentId) {
        self.cache.remove(&id);
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ComponentRepository> ComponentRepository for CachingComponentRepository<R> {
    async fn get(&self, id: ComponentId) -> Result<Component> {
        // Check cache first
        if let Some(cached) = self.cache.get(&id) {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.component.clone());
            }
        }

        // Cache miss or expired entry: fetch from the backing store
        let component = self.inner.get(id).await?;
        self.cache.insert(
            id,
            CachedComponent {
                component: component.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(component)
    }

    // Catalog-wide listings are not memoized: the result depends on the
    // whole catalog, not a single id, and excluding-set keys would make
    // invalidation far more expensive than the query itself.
    async fn list_excluding(&self, ids: &[ComponentId]) -> Result<Vec<Component>> {
        self.inner.list_excluding(ids).await
    }

    async fn update_price(&self, id: ComponentId, price: Decimal) -> Result<Component> {
        let updated = self.inner.update_price(id, price).await?;
        self.cache.remove(&id);
        Ok(updated)
    }

    async fn update_stock(&self, id: ComponentId, stock: i64) -> Result<Component> {
        let updated = self.inner.update_stock(id, stock).await?;
        self.cache.remove(&id);
        Ok(updated)
    }

    async fn price_history(&self, id: ComponentId) -> Result<Vec<PricePoint>> {
        self.inner.price_history(id).await
    }
}
