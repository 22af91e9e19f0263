//! Data models
//!
//! Transient, non-authoritative copies of the entities owned by the catalog API:
//! - Brand and Model as returned by list endpoints
//! - Creation payloads posted by the forms
//! - The price-range filter used by the filtered model list

mod brand;
mod catalog_model;
mod filter;

pub use brand::{Brand, CreateBrandInput};
pub use catalog_model::{parse_price, CreateModelInput, Model};
pub use filter::ModelFilter;
