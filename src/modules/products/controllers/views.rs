//! askama views for the HTML product pages.
//!
//! Each view is an actix `Responder` through `WebTemplate`, so handlers
//! return it directly and a render failure becomes a 500.

use askama::Template;
use askama_web::WebTemplate;

use crate::core::ModelState;
use crate::modules::products::models::{Product, ProductForm};

/// Product list page
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductIndexView {
    pub products: Vec<Product>,
}

/// Single product page
#[derive(Template, WebTemplate)]
#[template(path = "products/details.html")]
pub struct ProductDetailsView {
    pub product: Product,
}

/// New product form, empty or re-rendered with the submitted values
#[derive(Template, WebTemplate)]
#[template(path = "products/create.html")]
pub struct ProductCreateView {
    pub form: ProductForm,
    pub errors: ModelState,
}

/// Edit form for an existing product
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditView {
    pub id: i32,
    pub form: ProductForm,
    pub errors: ModelState,
}

/// Delete confirmation page
#[derive(Template, WebTemplate)]
#[template(path = "products/delete.html")]
pub struct ProductDeleteView {
    pub product: Product,
}
