/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod caching;
pub mod catalog;
pub mod console;
pub mod memory;
