use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::render::{GLOBAL_CSS, render_document};
use crate::ui::app::Page;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "docqet-web";

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::clone(&config),
    };
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        environment = %config.app.environment,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", "Server stopped");
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/static/globals.css", get(stylesheet_handler))
        .nest_service("/public", ServeDir::new(&state.config.app.public_dir));

    with_middleware(routes, state)
}

/// Add the 404 fallback, request timeout, tracing and CORS to `routes`.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    routes
        .fallback(not_found_handler)
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_elapsed) => {
                        (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                    }
                }
            },
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors.allowed_origins)),
        )
        .with_state(state)
}

/// CORS for read-only pages; origins that fail to parse are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(name: "server.shutdown", "Shutdown signal received");
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Render `page` as a full document with its status code.
fn page_response(page: Page) -> Response {
    let status = StatusCode::from_u16(page.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(render_document(page))).into_response()
}

/// GET / - Landing page.
async fn home_handler() -> Response {
    page_response(Page::Home)
}

/// Fallback - Not Found page.
async fn not_found_handler() -> Response {
    page_response(Page::NotFound)
}

/// GET /static/globals.css - Embedded stylesheet.
async fn stylesheet_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        GLOBAL_CSS,
    )
        .into_response()
}

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub timestamp: String,
}

/// GET /health - Liveness check.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.app.environment.as_str(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
