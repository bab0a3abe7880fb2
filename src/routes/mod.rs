// ABOUTME: Route module organization for the Strider HTTP API
// ABOUTME: Centralized route definitions with thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes.
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the service layer. The top-level [`router`] assembles the
//! full application with request tracing and CORS.

/// Health check and readiness routes
pub mod health;
/// Schedule generation routes
pub mod schedule;

pub use health::HealthRoutes;
pub use schedule::ScheduleRoutes;

use std::sync::Arc;

use axum::Router;
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ServerResources;

/// Assemble the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ScheduleRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
