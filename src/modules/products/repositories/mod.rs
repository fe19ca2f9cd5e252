pub mod product_repository;

use std::sync::Arc;

use crate::core::traits::Repository;
use crate::modules::products::models::Product;

pub use product_repository::MySqlProductRepository;

/// Shared handle the controllers receive as app data
pub type ProductStore = Arc<dyn Repository<Product>>;
