mod component_cache;

pub use component_cache::{CachingComponentRepository, DEFAULT_TTL};
