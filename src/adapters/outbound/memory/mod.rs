/// In-memory repository adapters
///
/// Concurrent-map implementations of the storage ports, used by the test
/// suite and the demo CLI. They honor the same contracts a database-backed
/// implementation must: snapshot reads, atomic line replacement, and stable
/// listing order.
mod alert_store;
mod build_store;
mod component_store;
mod social_store;

pub use alert_store::InMemoryAlertStore;
pub use build_store::InMemoryBuildStore;
pub use component_store::InMemoryComponentStore;
pub use social_store::InMemorySocialStore;
