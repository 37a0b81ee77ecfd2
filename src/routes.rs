// routes.rs
use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        admin::admin_handler, balances::balances_handler, contracts::contracts_handler,
        jobs::jobs_handler,
    },
    middleware::resolve_profile,
    AppState,
};

// Health check handler
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Admin reports stay outside the identity layer; everything else
    // requires a resolvable profile_id header.
    let api_route = Router::new()
        .nest(
            "/contracts",
            contracts_handler().layer(middleware::from_fn(resolve_profile)),
        )
        .nest(
            "/jobs",
            jobs_handler().layer(middleware::from_fn(resolve_profile)),
        )
        .nest(
            "/balances",
            balances_handler().layer(middleware::from_fn(resolve_profile)),
        )
        .nest("/admin", admin_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .merge(api_route)
}
