//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`app_router`] mounts them under `/api` together with the health check
//! and the shared middleware stack.

pub mod audit;
pub mod error;
pub mod workshop;

// Re-export key types for convenience
pub use audit::{audit_router, AuditAppState};
pub use error::{ApiError, ErrorResponse};
pub use workshop::{workshop_router, WorkshopAppState};

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::AppConfig;

/// Health check body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the complete application router from configuration.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `/api/audit/*` - Quick gender audit
/// - `/api/workshop/*` - Workshop content and participant input
pub fn app_router(config: &AppConfig) -> Router {
    let verbose = config.features.verbose_errors;

    let mut router = Router::new()
        .route("/health", get(health))
        .nest(
            "/api/audit",
            audit_router().with_state(AuditAppState::new(verbose)),
        )
        .nest(
            "/api/workshop",
            workshop_router().with_state(WorkshopAppState::new(verbose)),
        )
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    if let Some(cors) = cors_layer(config) {
        router = router.layer(cors);
    }

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

/// CORS for the configured origins.
///
/// Without configured origins, development is permissive and production
/// stays same-origin.
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return (!config.is_production()).then(CorsLayer::permissive);
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
