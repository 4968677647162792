//! # HTTP Server
//!
//! Assembles the API router, the static asset service with SPA
//! fallback, and the middleware stack (CORS, security headers, request
//! tracing, panic recovery).

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{self, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::routes::{api_routes, ApiState};

/// HTTP server for the coworking directory
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(HttpServerConfig::default(), catalog)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, catalog: Arc<Catalog>) -> Self {
        let router = Self::build_router(&config, catalog);
        Self { config, router }
    }

    /// Build the combined router with all endpoints and layers
    fn build_router(config: &HttpServerConfig, catalog: Arc<Catalog>) -> Router {
        let state = ApiState::new(catalog);

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Non-API paths serve static assets, falling back to the SPA
        // root document
        let spa = ServeDir::new(&config.static_dir)
            .fallback(ServeFile::new(config.static_dir.join("index.html")));

        let expose_errors = config.expose_errors;

        Router::new()
            .merge(health_routes())
            .nest("/api", api_routes(state))
            .fallback_service(spa)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(CatchPanicLayer::custom(
                move |panic: Box<dyn std::any::Any + Send + 'static>| -> Response {
                    ApiError::internal(panic_message(panic.as_ref()), expose_errors)
                        .into_response()
                },
            ))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("listening on http://{}", addr);

        axum::serve(listener, self.router).await
    }
}

/// Liveness route at the root level
fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}
