use crate::build_planning::domain::{AlertId, AlertStatus, ComponentId, InventoryAlert};
use crate::ports::outbound::AlertRepository;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory AlertRepository backed by a concurrent map.
#[derive(Default)]
pub struct InMemoryAlertStore {
    alerts: DashMap<AlertId, InventoryAlert>,
    next_id: AtomicU64,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> AlertId {
        AlertId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl AlertRepository for InMemoryAlertStore {
    async fn insert(
        &self,
        component_id: ComponentId,
        current_stock: i64,
        status: AlertStatus,
    ) -> Result<InventoryAlert> {
        let alert = InventoryAlert {
            id: self.allocate_id(),
            component_id,
            current_stock,
            status,
            created_at: Utc::now(),
            resolved_at: None,
        };
        self.alerts.insert(alert.id, alert.clone());
        Ok(alert)
    }

    async fn find_unresolved(
        &self,
        component_id: ComponentId,
        status: AlertStatus,
    ) -> Result<Option<InventoryAlert>> {
        let found = self
            .alerts
            .iter()
            .filter(|entry| {
                entry.component_id == component_id
                    && entry.status == status
                    && !entry.is_resolved()
            })
            .map(|entry| entry.clone())
            .min_by_key(|alert| alert.id);
        Ok(found)
    }

    async fn resolve_open(&self, component_id: ComponentId, at: DateTime<Utc>) -> Result<usize> {
        let mut resolved = 0;
        for mut entry in self.alerts.iter_mut() {
            if entry.component_id == component_id && !entry.is_resolved() {
                entry.resolved_at = Some(at);
                resolved += 1;
            }
        }
        Ok(resolved)
    }

    async fn list_unresolved(&self) -> Result<Vec<InventoryAlert>> {
        let mut open: Vec<InventoryAlert> = self
            .alerts
            .iter()
            .filter(|entry| !entry.is_resolved())
            .map(|entry| entry.clone())
            .collect();
        open.sort_by_key(|alert| alert.id);
        Ok(open)
    }
}
