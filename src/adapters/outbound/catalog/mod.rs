mod json_catalog;

pub use json_catalog::{load_catalog, load_catalog_store};
