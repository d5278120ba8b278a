use crate::build_planning::domain::{
    stock_status, Component, ComponentId, InventoryAlert, PricePoint, StockChange,
};
use crate::ports::outbound::{AlertNotifier, AlertRepository, ComponentRepository};
use crate::shared::{ForgeError, Result};
use chrono::Utc;
use rust_decimal::Decimal;

/// InventoryTracker - applies stock movements and keeps threshold alerts
/// in sync with them
///
/// Every movement funnels through [`record`](Self::record): the new level
/// is written, the reorder threshold is evaluated, and alerts are opened
/// (at most one unresolved alert per component and status) or resolved to
/// match. The notifier fires only when an alert is actually opened, never
/// on repeat evaluations of an already-alerted level.
///
/// # Type Parameters
/// * `CR` - ComponentRepository implementation
/// * `AR` - AlertRepository implementation
/// * `N` - AlertNotifier implementation
pub struct InventoryTracker<CR, AR, N> {
    components: CR,
    alerts: AR,
    notifier: N,
}

impl<CR, AR, N> InventoryTracker<CR, AR, N>
where
    CR: ComponentRepository,
    AR: AlertRepository,
    N: AlertNotifier,
{
    pub fn new(components: CR, alerts: AR, notifier: N) -> Self {
        Self {
            components,
            alerts,
            notifier,
        }
    }

    /// Applies a stock movement and reconciles alerts against the new
    /// level.
    ///
    /// # Returns
    /// The component with its updated stock.
    ///
    /// # Errors
    /// * [`ForgeError::InsufficientStock`] when a stock-out asks for more
    ///   units than are on hand
    /// * [`ForgeError::Validation`] for a negative movement amount
    pub async fn record(&self, id: ComponentId, change: StockChange) -> Result<Component> {
        let component = self.components.get(id).await?;

        let new_stock = match change {
            StockChange::StockIn(amount) => {
                Self::require_non_negative(amount)?;
                component.stock + amount
            }
            StockChange::StockOut(amount) => {
                Self::require_non_negative(amount)?;
                if amount > component.stock {
                    return Err(ForgeError::InsufficientStock {
                        name: component.name.clone(),
                        requested: amount,
                        available: component.stock,
                    }
                    .into());
                }
                component.stock - amount
            }
            // Absolute correction from a physical count.
            StockChange::Adjustment(level) => level,
        };

        let updated = self.components.update_stock(id, new_stock).await?;
        self.reconcile_alerts(&updated).await?;
        Ok(updated)
    }

    /// Books in a delivery of the component's configured reorder quantity.
    pub async fn receive_reorder(&self, id: ComponentId) -> Result<Component> {
        let component = self.components.get(id).await?;
        self.record(id, StockChange::StockIn(component.reorder_quantity))
            .await
    }

    /// Changes a component's price, appending the new price point to its
    /// history.
    ///
    /// # Errors
    /// Returns [`ForgeError::Validation`] for a negative price.
    pub async fn update_price(&self, id: ComponentId, price: Decimal) -> Result<Component> {
        if price < Decimal::ZERO {
            return Err(ForgeError::Validation {
                message: format!("Price cannot be negative (got {})", price),
            }
            .into());
        }
        self.components.update_price(id, price).await
    }

    pub async fn price_history(&self, id: ComponentId) -> Result<Vec<PricePoint>> {
        self.components.price_history(id).await
    }

    pub async fn active_alerts(&self) -> Result<Vec<InventoryAlert>> {
        self.alerts.list_unresolved().await
    }

    async fn reconcile_alerts(&self, component: &Component) -> Result<()> {
        match stock_status(component.stock, component.reorder_point) {
            Some(status) => {
                if self
                    .alerts
                    .find_unresolved(component.id, status)
                    .await?
                    .is_none()
                {
                    let alert = self
                        .alerts
                        .insert(component.id, component.stock, status)
                        .await?;
                    self.notifier.notify(component, &alert);
                }
            }
            None => {
                self.alerts.resolve_open(component.id, Utc::now()).await?;
            }
        }
        Ok(())
    }

    fn require_non_negative(amount: i64) -> Result<()> {
        if amount < 0 {
            return Err(ForgeError::Validation {
                message: format!("Stock movement amount cannot be negative (got {})", amount),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::{InMemoryAlertStore, InMemoryComponentStore};
    use crate::build_planning::domain::{AlertStatus, Category};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingNotifier {
        fired: Arc<AtomicUsize>,
    }

    impl AlertNotifier for CountingNotifier {
        fn notify(&self, _component: &Component, _alert: &InventoryAlert) {
            self.fired.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn tracker(
        stock: i64,
    ) -> (
        InventoryTracker<InMemoryComponentStore, InMemoryAlertStore, CountingNotifier>,
        Arc<AtomicUsize>,
    ) {
        let component = Component::new(ComponentId(1), "RM750", Category::Psu, dec!(15000.00))
            .unwrap()
            .with_stock(stock)
            .with_reorder(10, 20);
        let fired = Arc::new(AtomicUsize::new(0));
        let notifier = CountingNotifier {
            fired: Arc::clone(&fired),
        };
        (
            InventoryTracker::new(
                InMemoryComponentStore::with_components(vec![component]),
                InMemoryAlertStore::new(),
                notifier,
            ),
            fired,
        )
    }

    #[tokio::test]
    async fn test_stock_out_below_threshold_opens_low_stock_alert() {
        let (tracker, fired) = tracker(15);
        let updated = tracker
            .record(ComponentId(1), StockChange::StockOut(7))
            .await
            .unwrap();
        assert_eq!(updated.stock, 8);

        let alerts = tracker.active_alerts().await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].status, AlertStatus::LowStock);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_repeated_low_stock_does_not_duplicate_alert() {
        let (tracker, fired) = tracker(12);
        tracker
            .record(ComponentId(1), StockChange::StockOut(3))
            .await
            .unwrap();
        tracker
            .record(ComponentId(1), StockChange::StockOut(1))
            .await
            .unwrap();

        assert_eq!(tracker.active_alerts().await.unwrap().len(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovery_resolves_open_alerts() {
        let (tracker, _) = tracker(5);
        tracker
            .record(ComponentId(1), StockChange::StockOut(1))
            .await
            .unwrap();
        assert_eq!(tracker.active_alerts().await.unwrap().len(), 1);

        tracker
            .record(ComponentId(1), StockChange::StockIn(50))
            .await
            .unwrap();
        assert!(tracker.active_alerts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stock_out_beyond_available_is_rejected() {
        let (tracker, fired) = tracker(3);
        let err = tracker
            .record(ComponentId(1), StockChange::StockOut(5))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ForgeError>(),
            Some(ForgeError::InsufficientStock {
                requested: 5,
                available: 3,
                ..
            })
        ));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_depletion_to_zero_opens_out_of_stock_alert() {
        let (tracker, _) = tracker(4);
        tracker
            .record(ComponentId(1), StockChange::StockOut(4))
            .await
            .unwrap();
        let alerts = tracker.active_alerts().await.unwrap();
        assert_eq!(alerts[0].status, AlertStatus::OutOfStock);
    }

    #[tokio::test]
    async fn test_receive_reorder_adds_configured_quantity() {
        let (tracker, _) = tracker(2);
        let updated = tracker.receive_reorder(ComponentId(1)).await.unwrap();
        assert_eq!(updated.stock, 22);
    }

    #[tokio::test]
    async fn test_price_update_records_history() {
        let (tracker, _) = tracker(2);
        tracker
            .update_price(ComponentId(1), dec!(14000.00))
            .await
            .unwrap();
        let history = tracker.price_history(ComponentId(1)).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].price, dec!(14000.00));
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let (tracker, _) = tracker(2);
        assert!(tracker
            .update_price(ComponentId(1), dec!(-1.00))
            .await
            .is_err());
    }
}
