//! HTTP adapters - REST API implementations.

pub mod catalog;

pub use catalog::{catalog_router, CatalogAppState};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

/// Assembles the full application router with tracing, timeout and CORS
/// layers applied.
///
/// # Errors
///
/// Returns `ValidationError::InvalidOrigin` if a configured origin is not a
/// bare http(s) origin.
pub fn app_router(state: CatalogAppState, server: &ServerConfig) -> Result<Router, ValidationError> {
    let cors = cors_layer(&server.allowed_origins()?)?;
    Ok(catalog_router()
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http()))
}

/// Read-only API, so only GET is allowed cross-origin. No configured origins
/// means any origin.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, ValidationError> {
    let layer = CorsLayer::new().allow_methods([axum::http::Method::GET]);
    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| ValidationError::InvalidOrigin(o.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogGateway;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_app_router_serves_health_with_cors() {
        let state = CatalogAppState::new(Arc::new(InMemoryCatalogGateway::new()), 24, 100);
        let server = ServerConfig {
            allowed_origins: Some("http://localhost:3000".to_string()),
            ..Default::default()
        };
        let app = app_router(state, &server).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_app_router_rejects_invalid_origin() {
        let state = CatalogAppState::new(Arc::new(InMemoryCatalogGateway::new()), 24, 100);
        let server = ServerConfig {
            allowed_origins: Some("not an origin".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            app_router(state, &server),
            Err(ValidationError::InvalidOrigin(_))
        ));
    }
}
