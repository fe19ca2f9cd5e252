mod product;
mod product_form;

pub use product::{Product, COLOR_MAX_LENGTH, NAME_MAX_LENGTH, PRICE_MAX_INTEGER_DIGITS, PRICE_SCALE};
pub use product_form::ProductForm;
