pub mod build_request;
pub mod compatibility_report;

pub use build_request::{CreateBuildRequest, PartSelection, UpdateBuildRequest};
pub use compatibility_report::{CompatibilityReport, ValidationReport};
