pub mod health;
pub mod products;

use actix_web::web;

/// Register every route without middleware; the server and tests wrap as needed
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .service(web::scope("/api").configure(products::controllers::products_api_controller::configure))
        .configure(products::controllers::products_controller::configure);
}
