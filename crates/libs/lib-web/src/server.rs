//! # Server Setup
//!
//! Logging, configuration, database, router and HTTP listener.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, require_auth, stamp_req, RequestStamp};
use crate::services::AuthService;
use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::Duration;
use lib_auth::TokenService;
use lib_core::{create_pool, migrate, Config, DbPool};
use lib_utils::get_env_or;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub tokens: TokenService,
}

impl AppState {
    /// Build state from a pool and validated config. The token service is
    /// derived from the config's secret and expiry.
    pub fn new(db: DbPool, config: Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, Duration::hours(config.jwt_expiration_hours));
        Self { db, config, tokens }
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.db.clone(), self.tokens.clone())
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Listener and CORS settings.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// `BIND_ADDRESS` and comma-separated `ALLOWED_ORIGINS`, with defaults.
    pub fn from_env() -> Self {
        let default = Self::default();
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(default.allowed_origins);

        Self {
            bind_address: get_env_or("BIND_ADDRESS", &default.bind_address),
            allowed_origins,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Install the global tracing subscriber, filtered by `LOG_LEVEL`.
///
/// `RUST_LOG` style directives are accepted too (e.g. `info,sqlx=warn`).
pub fn init_tracing() -> anyhow::Result<()> {
    let log_level = get_env_or("LOG_LEVEL", "info").to_lowercase();
    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))?;

    info!(" Log level: {}", log_level);
    Ok(())
}

/// Initialize and start the HTTP server.
///
/// # Errors
///
/// - Configuration loading or validation fails
/// - Database connection or migrations fail
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    info!(" BLOG BACKEND STARTING");

    info!("Loading configuration...");
    let app_config = Config::from_env()?;
    app_config.validate()?;
    info!("Database URL: {}", app_config.database_url);

    info!("Connecting to database...");
    let pool = create_pool(&app_config.database_url).await?;

    info!(" Running database migrations...");
    migrate(&pool).await?;
    info!(" Migrations complete");

    let state = AppState::new(pool, app_config);
    info!("Token expiry: {} hour(s)", state.tokens.ttl().num_hours());
    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(" Server stopped");
    Ok(())
}

/// Create the application router.
///
/// The auth guard is attached with `route_layer` to individual method routes,
/// so `GET /posts` stays public while `POST /posts` is protected.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let guard = axum::middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/profile",
            get(handlers::auth::profile).route_layer(guard.clone()),
        )
        // The guard wraps only the POST handler; `get` is added after it.
        .route(
            "/posts",
            post(handlers::posts::create_post)
                .route_layer(guard)
                .get(handlers::posts::list_posts),
        )
        .route("/health", get(|| async { "OK" }))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        // Outside the trace layer, so the span already sees the request id.
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!(" Shutdown signal received");
}

/// Log server information
fn log_server_info() {
    info!(" AUTH:");
    info!("   • POST /auth/register");
    info!("   • POST /auth/login");
    info!("   • GET  /auth/profile   (bearer)");
    info!(" POSTS:");
    info!("   • GET  /posts");
    info!("   • POST /posts          (bearer)");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
