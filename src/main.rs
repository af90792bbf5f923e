//! User Records Server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use user_records_lib::api::{self, ApiDoc};
use user_records_lib::config::Config;
use user_records_lib::db::{DbPool, PgUserRepository, UserRepository};
use user_records_lib::error::ErrorCode;
use user_records_lib::middleware::RequestLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  User Records Server");
    info!("  Database: {}@{}:{}", config.database.name, config.database.host, config.database.port);
    info!("========================================");

    let pool = match DbPool::new(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            let code = ErrorCode::DbRepoFailedToInitialize;
            error!(code = code.as_i32(), error = %e, "{}", code.message());
            std::process::exit(1);
        }
    };

    let repo: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let repo = web::Data::from(repo);
    let pool = web::Data::new(pool);

    let bind_address = config.server.bind_address();
    let workers = num_cpus::get();
    info!("Starting server at http://{} ({} workers)", bind_address, workers);
    info!("API docs at http://{}/docs/", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(pool.clone())
            .app_data(repo.clone())
            .configure(api::configure_health_routes)
            .configure(api::configure_user_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
