/// Ports layer - interface definitions between the core and infrastructure
pub mod outbound;
