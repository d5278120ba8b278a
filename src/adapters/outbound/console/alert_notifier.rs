use crate::build_planning::domain::{Component, InventoryAlert};
use crate::ports::outbound::AlertNotifier;

/// StderrAlertNotifier adapter for delivering stock alerts to the console
///
/// Writes alerts to stderr so they never interfere with the tool's stdout
/// output. A production deployment replaces this with the e-mail/webhook
/// collaborator behind the same port.
#[derive(Default)]
pub struct StderrAlertNotifier;

impl StderrAlertNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl AlertNotifier for StderrAlertNotifier {
    fn notify(&self, component: &Component, alert: &InventoryAlert) {
        eprintln!(
            "⚠️  Stock alert: \"{}\" is {} (current stock: {})",
            component.name, alert.status, alert.current_stock
        );
    }
}
