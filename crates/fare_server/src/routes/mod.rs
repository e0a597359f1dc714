//! Route modules for the fare server
//!
//! This module contains endpoint group-specific routers:
//! - calendar: Fare-calendar generation endpoint
//! - health: Health check and readiness endpoints

pub mod calendar;
pub mod health;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use fare_pricing::PricingPolicy;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Pricing policy all quotes are computed against
    pub policy: Arc<PricingPolicy>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>, policy: Arc<PricingPolicy>) -> Self {
        Self {
            config,
            policy,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>, policy: Arc<PricingPolicy>) -> Router {
    let state = AppState::new(config, policy);

    Router::new()
        .merge(health::routes())
        .merge(calendar::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(
            Arc::new(ServerConfig::default()),
            Arc::new(PricingPolicy::default()),
        )
    }

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/calendar?origin=LHR&destination=JFK&month=2025-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let router = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_app_state_config_access() {
        let mut config = ServerConfig::default();
        config.port = 9999;
        let state = AppState::new(Arc::new(config), Arc::new(PricingPolicy::default()));

        assert_eq!(state.config.port, 9999);
    }
}
