pub mod entity;
pub mod repository;

pub use entity::Entity;
pub use repository::Repository;
