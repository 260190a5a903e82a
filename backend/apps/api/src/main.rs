//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthAppState, AuthConfig, PgPrincipalRepository, PrincipalKind, auth_router_generic};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use events::{PgEventRepository, admin_router_generic, events_router_generic};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,events=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, the JWT secret must be provided
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        AuthConfig::new(secret.into_bytes())
    };
    let auth_config = Arc::new(auth_config);

    let principal_repo = Arc::new(PgPrincipalRepository::new(pool.clone()));
    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));

    // The admin state backs both the adminAuth routes and the admin
    // guard on event deletion and the dashboard
    let admin_state = AuthAppState::new(
        PrincipalKind::Admin,
        principal_repo.clone(),
        auth_config.clone(),
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://localhost:5174".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/", get(|| async { "Welcome to UniEvent API" }))
        .nest(
            "/api/adminAuth",
            auth_router_generic(
                PrincipalKind::Admin,
                principal_repo.clone(),
                auth_config.clone(),
            ),
        )
        .nest(
            "/api/userAuth",
            auth_router_generic(PrincipalKind::User, principal_repo.clone(), auth_config),
        )
        .nest(
            "/api/events",
            events_router_generic(event_repo.clone(), admin_state.clone()),
        )
        .nest("/api/admin", admin_router_generic(event_repo, admin_state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
