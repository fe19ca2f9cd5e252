use actix_web::{http::header, web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::core::error::AppError;
use crate::middleware::error_handler::{json_error_handler, path_error_handler};
use crate::modules::products::models::Product;
use crate::modules::products::repositories::ProductStore;

/// Route name used to build the `Location` of created products
pub const GET_PRODUCT_ROUTE: &str = "api_get_product";

/// List all products
/// GET /api/products
#[instrument(skip(repository))]
pub async fn get_products(repository: web::Data<ProductStore>) -> Result<HttpResponse, AppError> {
    let products = repository.get_all().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /api/products/{id}
#[instrument(skip(repository))]
pub async fn get_product(
    repository: web::Data<ProductStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match repository.get_by_id(id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(AppError::not_found(format!("Product {}", id))),
    }
}

/// Create a product
/// POST /api/products
/// Responds 201 with the stored product and a Location pointing at GET /api/products/{id}
#[instrument(skip(req, repository, body))]
pub async fn post_product(
    req: HttpRequest,
    repository: web::Data<ProductStore>,
    body: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = body.into_inner();
    product.validate().into_result()?;

    let created = repository.create(product).await?;

    let location = req
        .url_for(GET_PRODUCT_ROUTE, [created.id.to_string()])
        .map_err(|e| AppError::internal(format!("Failed to build product URL: {}", e)))?;

    tracing::info!(id = created.id, "Created product");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(created))
}

/// Replace a product
/// PUT /api/products/{id}
/// The body id must match the route id; the store is not touched otherwise
#[instrument(skip(repository, body))]
pub async fn put_product(
    repository: web::Data<ProductStore>,
    path: web::Path<i32>,
    body: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = body.into_inner();

    if product.id != id {
        tracing::warn!(route_id = id, body_id = product.id, "Product id mismatch");
        return Err(AppError::validation(format!(
            "Product id {} does not match route id {}",
            product.id, id
        )));
    }

    product.validate().into_result()?;
    repository.update(product).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product
/// DELETE /api/products/{id}
#[instrument(skip(repository))]
pub async fn delete_product(
    repository: web::Data<ProductStore>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let product = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", id)))?;

    repository.delete(product).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure product API routes (mounted under /api by the caller)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(
                web::resource("")
                    .route(web::get().to(get_products))
                    .route(web::post().to(post_product)),
            )
            .service(
                web::resource("/{id}")
                    .name(GET_PRODUCT_ROUTE)
                    .route(web::get().to(get_product))
                    .route(web::put().to(put_product))
                    .route(web::delete().to(delete_product)),
            ),
    );
}
