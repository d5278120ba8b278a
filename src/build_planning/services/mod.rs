mod compatibility;
pub mod pricing;

pub use compatibility::{CompatibilityChecker, Violation};
