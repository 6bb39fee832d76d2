//! Suenos Catalog Server
//!
//! HTTP surface for the Los Mejores Sueños product catalog. Serves the
//! category/product read endpoints and the activation toggle over one of
//! two interchangeable backends: the seeded in-memory mock or the remote
//! row store.

mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use storage::{MockCatalog, RemoteCatalog};
use suenos_catalog::CatalogRepo;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CatalogRepo>,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Suenos Catalog Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    // Load configuration; a half-configured remote store refuses to start
    let config = load_config().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, backend={}",
        config.bind_address, config.backend
    );

    let repo: Arc<dyn CatalogRepo> = match config.backend {
        Backend::Mock => {
            info!("Seeding in-memory catalog...");
            Arc::new(MockCatalog::new())
        }
        Backend::Remote => {
            info!("Configuring remote catalog store...");
            Arc::new(RemoteCatalog::from_env().context("Failed to configure remote store")?)
        }
    };

    let state = AppState { repo };

    info!("Building HTTP router...");
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api/v1", api_routes())
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::categories::list))
        .route("/categories/:id/products", get(handlers::categories::products))
        .route("/products", get(handlers::products::list))
        .route("/products/:slug", get(handlers::products::get))
        .route("/products/:slug/active", post(handlers::products::activate))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Mock,
    Remote,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Mock => write!(f, "mock"),
            Backend::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    backend: Backend,
}

fn load_config() -> Result<Config> {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let backend = match std::env::var("CATALOG_BACKEND") {
        Ok(value) => match value.as_str() {
            "mock" => Backend::Mock,
            "remote" => Backend::Remote,
            other => anyhow::bail!("Unknown CATALOG_BACKEND value: {}", other),
        },
        Err(_) => Backend::Mock,
    };

    Ok(Config {
        bind_address,
        backend,
    })
}
