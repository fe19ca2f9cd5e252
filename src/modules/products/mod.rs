// Products module: catalog entity, storage and both HTTP surfaces

pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{Product, ProductForm};
pub use repositories::{MySqlProductRepository, ProductStore};
