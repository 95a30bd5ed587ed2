use axum::Router;

use collector_application::AppState;

use crate::handlers::{ops_handlers, query_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/vendor/check",
            axum::routing::get(ops_handlers::vendor_check),
        )
        .route(
            "/v1/ops/poll/trigger",
            axum::routing::post(ops_handlers::trigger_poll),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .route(
            "/v1/query/status",
            axum::routing::get(query_handlers::get_status),
        )
        .route(
            "/v1/query/readings",
            axum::routing::get(query_handlers::list_readings),
        )
        .with_state(state)
}
