pub mod calculator;
pub mod error;
pub mod in_memory_repository;
pub mod traits;
pub mod validation;

pub use error::{AppError, Result};
pub use in_memory_repository::InMemoryRepository;
pub use validation::{FieldError, ModelState};
