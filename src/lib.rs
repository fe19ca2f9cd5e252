//! Product catalog service library
//!
//! A product catalog served as a JSON API under `/api/products` and as
//! server-rendered pages under `/products`, over a pluggable repository.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
