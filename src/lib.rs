//! StyleSphere storefront API
//!
//! Session-cookie authentication plus read-only catalog browsing over
//! PostgreSQL. The binary entry point just calls [`start_server`].

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod validation;

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use axum_extra::extract::cookie::Key;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    config::AppConfig,
    repositories::{CatalogRepository, UserRepository},
    session::SessionStore,
    state::AppState,
};

/// Initialize the service and serve requests until shutdown
pub async fn start_server() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting storefront service");

    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let db_config = database::DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    database::health_check(&pool).await?;
    info!("Database connection successful");

    database::run_migrations(&pool).await?;

    // Seed the catalog before serving any read traffic
    let catalog_repository = CatalogRepository::new(pool.clone());
    seed::ensure_seed_data(&catalog_repository).await?;

    let cookie_key = match &config.session_secret {
        Some(secret) => Key::derive_from(secret.as_bytes()),
        None => {
            warn!("SESSION_SECRET not set; sessions will not survive a restart");
            Key::generate()
        }
    };

    let user_repository = UserRepository::new(pool.clone());
    let sessions = SessionStore::new(pool, config.session_ttl_seconds);

    let app_state = AppState {
        user_repository,
        catalog_repository,
        sessions,
        cookie_key,
    };

    info!("Storefront service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state).layer(cors_layer(&config));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Storefront service listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the CORS layer from the configured origins. Credentialed requests
/// are only allowed for an explicit origin list; a wildcard origin cannot
/// carry credentials.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if config.allows_any_origin() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}
