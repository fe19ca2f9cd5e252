use actix_cors::Cors;
use actix_web::http::{header, Method};

/// CORS policy for the JSON API
///
/// Same-origin callers always pass; `allowed_origin` adds one cross-origin client.
pub fn api_cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors,
    }
}
