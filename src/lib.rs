//! Catalog Console - a server-rendered management console for a brand and
//! model catalog
//!
//! All business logic and persistence live in the external catalog API; this
//! library renders views and issues HTTP requests.

pub mod client;
pub mod config;
pub mod models;
pub mod services;
pub mod theme;
pub mod views;
