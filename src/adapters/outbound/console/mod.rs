mod alert_notifier;

pub use alert_notifier::StderrAlertNotifier;
