use super::component::ComponentId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an inventory alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of a stock alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    LowStock,
    OutOfStock,
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::LowStock => write!(f, "low stock"),
            AlertStatus::OutOfStock => write!(f, "out of stock"),
        }
    }
}

/// An alert raised when a component's stock crossed a threshold.
///
/// At most one unresolved alert per (component, status) pair exists at any
/// time; the tracker checks before creating a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAlert {
    pub id: AlertId,
    pub component_id: ComponentId,
    /// Stock level at the moment the alert was raised.
    pub current_stock: i64,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl InventoryAlert {
    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }
}

/// A stock mutation applied through the inventory tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    /// Goods received: stock increases by the given amount.
    StockIn(i64),
    /// Goods shipped or consumed: stock decreases by the given amount.
    StockOut(i64),
    /// Stocktake correction: stock is set to the given level.
    Adjustment(i64),
}

/// A recorded catalog price, kept so price trends stay auditable after the
/// live price moves on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Classifies a stock level against the component's reorder point.
///
/// Returns `None` while stock is comfortably above the reorder point.
pub fn stock_status(stock: i64, reorder_point: i64) -> Option<AlertStatus> {
    if stock <= 0 {
        Some(AlertStatus::OutOfStock)
    } else if stock <= reorder_point {
        Some(AlertStatus::LowStock)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_out_of_stock_at_zero() {
        assert_eq!(stock_status(0, 10), Some(AlertStatus::OutOfStock));
        assert_eq!(stock_status(-2, 10), Some(AlertStatus::OutOfStock));
    }

    #[test]
    fn test_stock_status_low_at_reorder_point() {
        assert_eq!(stock_status(10, 10), Some(AlertStatus::LowStock));
        assert_eq!(stock_status(1, 10), Some(AlertStatus::LowStock));
    }

    #[test]
    fn test_stock_status_healthy_above_reorder_point() {
        assert_eq!(stock_status(11, 10), None);
    }

    #[test]
    fn test_alert_status_display() {
        assert_eq!(format!("{}", AlertStatus::LowStock), "low stock");
        assert_eq!(format!("{}", AlertStatus::OutOfStock), "out of stock");
    }
}
