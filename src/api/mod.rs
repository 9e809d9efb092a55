// Router assembly for the HTTP layer
use crate::handlers;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub use crate::handlers::{routes, AppState};

/// Request size limit for every route (form posts and JSON bodies are tiny).
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Assembles the application router.
///
/// `protected` is the rate-limited part of the app (normally
/// [`handlers::routes`] wrapped in a governor layer); the health check is
/// merged outside of it.
pub fn build_app(state: Arc<AppState>, protected: Router<Arc<AppState>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
