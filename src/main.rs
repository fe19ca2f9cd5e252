use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use product_catalog::config::{database, Config, LogFormat, StorageBackend};
use product_catalog::core::InMemoryRepository;
use product_catalog::middleware::{api_cors, ErrorLogger, RateLimiter, RequestId};
use product_catalog::modules::{health, products};
use product_catalog::products::{MySqlProductRepository, Product, ProductStore};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "product_catalog=debug,actix_web=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(config.app.log_format);

    tracing::info!("Starting Product Catalog");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Storage backend: {}", config.storage);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let mut db_pool = None;
    let repository: ProductStore = match config.storage {
        StorageBackend::MySql => {
            let database_config = config
                .database
                .as_ref()
                .context("DATABASE_URL not set")?;

            let pool = database_config
                .create_pool()
                .await
                .context("Failed to create database pool")?;

            database::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!(
                "Database pool initialized ({} connections)",
                database_config.max_connections
            );

            db_pool = Some(web::Data::new(pool.clone()));
            Arc::new(MySqlProductRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; products are lost on restart");
            Arc::new(InMemoryRepository::<Product>::new())
        }
    };

    let repository = web::Data::new(repository);
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute);
    let cors_origin = config.security.cors_allowed_origin.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(repository.clone());

        let app = match &db_pool {
            Some(pool) => app.app_data(pool.clone()),
            None => app,
        };

        app.configure(health::configure)
            .service(
                web::scope("/api")
                    .wrap(rate_limiter.clone())
                    .wrap(api_cors(cors_origin.as_deref()))
                    .configure(products::controllers::products_api_controller::configure),
            )
            .configure(products::controllers::products_controller::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
