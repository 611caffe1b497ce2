//! Axum router construction for the resource API.
//!
//! Assembles the ten resource routes into a single [`Router`] with CORS
//! open to any origin (the rig dashboard is served separately) and
//! per-request tracing.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes, for each resource, `GET` (list) and `POST`
/// (create):
/// - `/vehicles`
/// - `/sensors`
/// - `/measurements`
/// - `/tests`
/// - `/results`
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/vehicles",
            get(handlers::list_vehicles).post(handlers::create_vehicle),
        )
        .route(
            "/sensors",
            get(handlers::list_sensors).post(handlers::create_sensor),
        )
        .route(
            "/measurements",
            get(handlers::list_measurements).post(handlers::create_measurement),
        )
        .route("/tests", get(handlers::list_tests).post(handlers::create_test))
        .route(
            "/results",
            get(handlers::list_results).post(handlers::create_result),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
