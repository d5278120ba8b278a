use crate::build_planning::domain::{Component, InventoryAlert};

/// AlertNotifier port for delivering stock alerts
///
/// Actual delivery (e-mail to the purchasing team, chat webhook, ...) is an
/// external collaborator; the core only hands over the freshly created
/// alert. Implementations must not fail the stock mutation that triggered
/// the alert, which is why this is a fire-and-forget notification.
pub trait AlertNotifier: Send + Sync {
    /// Delivers a stock alert for the given component.
    fn notify(&self, component: &Component, alert: &InventoryAlert);
}
