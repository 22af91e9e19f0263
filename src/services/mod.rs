//! Services layer
//!
//! Typed catalog operations built on top of the API client.

pub mod catalog;

pub use catalog::{brand_models_path, CatalogService, Created};
