//! Web layer module
//!
//! Thin axum handlers over the catalog and the embed resolver. All JSON
//! endpoints answer with the [`ApiResponse`] envelope; nothing in the catalog
//! path surfaces as an HTTP error because source failures are absorbed by the
//! static fallback.

use anyhow::Result;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::catalog::VideoCatalog;
use crate::config::Config;
use crate::embed::EmbedResolver;

pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod utils;

pub use extractors::RequestContext;
pub use responses::{ApiResponse, handle_error, handle_result};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<VideoCatalog>,
    pub resolver: EmbedResolver,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<VideoCatalog>) -> Self {
        let resolver = EmbedResolver::new(config.portfolio.local_media_prefix.clone());
        Self {
            catalog,
            resolver,
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/live", get(handlers::health::liveness_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(handlers::portfolio::get_portfolio))
        .route("/videos", get(handlers::portfolio::list_videos))
        .route("/videos/{id}", get(handlers::portfolio::get_video))
        .route("/categories", get(handlers::portfolio::list_categories))
        .route("/hero", get(handlers::portfolio::get_hero))
        .route("/embed", get(handlers::embed::resolve_embed))
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, catalog: Arc<VideoCatalog>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = router(AppState::new(config, catalog));
        Ok(Self { app, addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until Ctrl-C or SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Web server listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
