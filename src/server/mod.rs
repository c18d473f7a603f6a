//! Axum HTTP surface for the vision-board proxy.
//!
//! One POST endpoint per generation task plus a GET health check:
//!
//!   POST /generate-image
//!   POST /generate-quotes
//!   POST /generate-vision-quotes
//!   POST /generate-individual-quotes
//!   POST /generate-questions
//!   GET  /health
//!
//! The router is built over `Arc<AppContext>` state so integration tests
//! can drive it with a stub provider through `tower::ServiceExt::oneshot`.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

use crate::config::ProxyConfig;
use crate::llm::GenerativeProvider;

/// Shared state handed to every handler.
pub struct AppContext {
    /// Remote model provider; a stub in tests, the Gemini client in prod.
    pub provider: Arc<dyn GenerativeProvider>,
    /// Proxy configuration (models, port, origins).
    pub config: ProxyConfig,
}

impl AppContext {
    pub fn new(provider: Arc<dyn GenerativeProvider>, config: ProxyConfig) -> Self {
        Self { provider, config }
    }
}

/// Build the proxy router with its CORS layer.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let origins: Vec<HeaderValue> = ctx
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/generate-image", post(routes::generate_image))
        .route("/generate-quotes", post(routes::generate_quotes))
        .route(
            "/generate-vision-quotes",
            post(routes::generate_vision_quotes),
        )
        .route(
            "/generate-individual-quotes",
            post(routes::generate_individual_quotes),
        )
        .route("/generate-questions", post(routes::generate_questions))
        .route("/health", get(routes::health))
        .layer(cors)
        .with_state(ctx)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(ctx: Arc<AppContext>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.port));
    let router = build_router(ctx);

    info!("Vision proxy listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
