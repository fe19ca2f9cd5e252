//! Browser-facing product pages.
//!
//! Every action either renders a view, answers 404, or redirects back to
//! the product list. Optional ids are modelled as `Option<web::Path<i32>>`
//! so `/products/details` and `/products/details/{id}` share a handler.

use actix_web::{http::header, web, Either, HttpResponse};
use tracing::instrument;

use super::views::{
    ProductCreateView, ProductDeleteView, ProductDetailsView, ProductEditView, ProductIndexView,
};
use crate::core::error::AppError;
use crate::core::ModelState;
use crate::middleware::error_handler::form_error_handler;
use crate::modules::products::models::ProductForm;
use crate::modules::products::repositories::ProductStore;

/// Path of the Index action
pub const INDEX_PATH: &str = "/products";

/// A rendered page, or a bare redirect / 404
type PageOr<V> = Either<V, HttpResponse>;

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, INDEX_PATH))
        .finish()
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// GET /products
#[instrument(skip(repository))]
pub async fn index(repository: web::Data<ProductStore>) -> Result<ProductIndexView, AppError> {
    let products = repository.get_all().await?;
    Ok(ProductIndexView { products })
}

/// GET /products/details/{id?}
#[instrument(skip(repository))]
pub async fn details(
    repository: web::Data<ProductStore>,
    id: Option<web::Path<i32>>,
) -> Result<PageOr<ProductDetailsView>, AppError> {
    let Some(id) = id.map(web::Path::into_inner) else {
        return Ok(Either::Right(redirect_to_index()));
    };

    match repository.get_by_id(id).await? {
        Some(product) => Ok(Either::Left(ProductDetailsView { product })),
        None => {
            tracing::info!(id, "Product not found");
            Ok(Either::Right(not_found()))
        }
    }
}

/// GET /products/create
pub async fn create() -> ProductCreateView {
    ProductCreateView {
        form: ProductForm::default(),
        errors: ModelState::new(),
    }
}

/// POST /products/create
#[instrument(skip(repository, form))]
pub async fn create_post(
    repository: web::Data<ProductStore>,
    form: web::Form<ProductForm>,
) -> Result<PageOr<ProductCreateView>, AppError> {
    let form = form.into_inner();

    match form.bind() {
        Ok(product) => {
            let created = repository.create(product).await?;
            tracing::info!(id = created.id, "Created product");
            Ok(Either::Right(redirect_to_index()))
        }
        Err(errors) => {
            tracing::warn!(errors = errors.errors().len(), "Rejected product form");
            Ok(Either::Left(ProductCreateView { form, errors }))
        }
    }
}

/// GET /products/edit/{id?}
#[instrument(skip(repository))]
pub async fn edit(
    repository: web::Data<ProductStore>,
    id: Option<web::Path<i32>>,
) -> Result<PageOr<ProductEditView>, AppError> {
    let Some(id) = id.map(web::Path::into_inner) else {
        return Ok(Either::Right(redirect_to_index()));
    };

    match repository.get_by_id(id).await? {
        Some(product) => Ok(Either::Left(ProductEditView {
            id,
            form: ProductForm::from_product(&product),
            errors: ModelState::new(),
        })),
        None => {
            tracing::info!(id, "Product not found");
            Ok(Either::Right(not_found()))
        }
    }
}

/// POST /products/edit/{id}
#[instrument(skip(repository, form))]
pub async fn edit_post(
    repository: web::Data<ProductStore>,
    path: web::Path<i32>,
    form: web::Form<ProductForm>,
) -> Result<PageOr<ProductEditView>, AppError> {
    let id = path.into_inner();
    let form = form.into_inner();

    if form.posted_id().is_some_and(|posted| posted != id) {
        tracing::warn!(id, "Edit form key does not match route");
        return Ok(Either::Right(not_found()));
    }

    match form.bind() {
        Ok(mut product) => {
            product.id = id;
            repository.update(product).await?;
            Ok(Either::Right(redirect_to_index()))
        }
        Err(errors) => {
            tracing::warn!(id, errors = errors.errors().len(), "Rejected product form");
            Ok(Either::Left(ProductEditView { id, form, errors }))
        }
    }
}

/// GET /products/delete/{id?}
#[instrument(skip(repository))]
pub async fn delete(
    repository: web::Data<ProductStore>,
    id: Option<web::Path<i32>>,
) -> Result<PageOr<ProductDeleteView>, AppError> {
    let Some(id) = id.map(web::Path::into_inner) else {
        return Ok(Either::Right(not_found()));
    };

    match repository.get_by_id(id).await? {
        Some(product) => Ok(Either::Left(ProductDeleteView { product })),
        None => Ok(Either::Right(not_found())),
    }
}

/// POST /products/delete/{id}
#[instrument(skip(repository))]
pub async fn delete_confirmed(
    repository: web::Data<ProductStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if let Some(product) = repository.get_by_id(id).await? {
        repository.delete(product).await?;
        tracing::info!(id, "Deleted product");
    }

    Ok(redirect_to_index())
}

/// GET /
pub async fn home() -> HttpResponse {
    redirect_to_index()
}

/// Configure product page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home)).service(
        web::scope(INDEX_PATH)
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .route("", web::get().to(index))
            .route("/details", web::get().to(details))
            .route("/details/{id}", web::get().to(details))
            .route("/create", web::get().to(create))
            .route("/create", web::post().to(create_post))
            .route("/edit", web::get().to(edit))
            .route("/edit/{id}", web::get().to(edit))
            .route("/edit/{id}", web::post().to(edit_post))
            .route("/delete", web::get().to(delete))
            .route("/delete/{id}", web::get().to(delete))
            .route("/delete/{id}", web::post().to(delete_confirmed)),
    );
}
