use crate::errors::{AppError, LookupError};
use crate::models::{LocationRecord, TrackRequest};
use crate::render;
use crate::tracker::{Tracker, TrackerSnapshot};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// The demo lookup session.
    pub tracker: Tracker,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }
}

/// Routes subject to rate limiting: the page, its form posts, and the JSON API.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        // HTML page and its form posts
        .route("/", get(index))
        .route("/track", post(track_form))
        .route("/reset", post(reset_form))
        .route("/samples/:index", post(select_sample_form))
        // JSON API
        .route("/api/v1/tracker", get(get_tracker))
        .route("/api/v1/tracker/track", post(track))
        .route("/api/v1/tracker/reset", post(reset))
        .route("/api/v1/samples", get(list_samples))
        .route("/api/v1/samples/:index/select", post(select_sample))
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "phone-locator",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /
///
/// Renders the demo page from the current session.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.tracker.snapshot().await;
    Html(render::page(&snapshot, state.tracker.reference_set()))
}

/// GET /api/v1/tracker
pub async fn get_tracker(State(state): State<Arc<AppState>>) -> Json<TrackerSnapshot> {
    Json(state.tracker.snapshot().await)
}

/// POST /api/v1/tracker/track
///
/// Starts a lookup. Returns 202 with the pending snapshot, 400 with the
/// validation message, or 409 while another lookup is pending.
pub async fn track(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TrackRequest>,
) -> Result<(StatusCode, Json<TrackerSnapshot>), AppError> {
    tracing::info!("POST /tracker/track - phone: {:?}", body.phone);

    state.tracker.trigger(&body.phone).await?;

    Ok((StatusCode::ACCEPTED, Json(state.tracker.snapshot().await)))
}

/// POST /api/v1/tracker/reset
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<TrackerSnapshot> {
    tracing::info!("POST /tracker/reset");
    Json(state.tracker.reset().await)
}

/// GET /api/v1/samples
pub async fn list_samples(State(state): State<Arc<AppState>>) -> Json<Vec<LocationRecord>> {
    Json(state.tracker.reference_set().to_vec())
}

/// POST /api/v1/samples/:index/select
///
/// Copies the sample's phone number into the session input.
pub async fn select_sample(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<TrackerSnapshot>, AppError> {
    state
        .tracker
        .select_sample(index)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Sample {} not found", index)))
}

/// POST /track (form)
///
/// Validation errors and rejected re-triggers end up on the page, so the
/// form always redirects back.
pub async fn track_form(
    State(state): State<Arc<AppState>>,
    Form(body): Form<TrackRequest>,
) -> Redirect {
    match state.tracker.trigger(&body.phone).await {
        Ok(lookup_id) => tracing::debug!("Form lookup {} scheduled", lookup_id),
        Err(err) if err.is_validation() => {}
        Err(err) => tracing::debug!("Form trigger ignored: {}", err),
    }
    Redirect::to("/")
}

/// POST /reset (form)
pub async fn reset_form(State(state): State<Arc<AppState>>) -> Redirect {
    state.tracker.reset().await;
    Redirect::to("/")
}

/// POST /samples/:index (form)
pub async fn select_sample_form(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    match state.tracker.select_sample(index).await {
        Ok(Some(_)) | Err(LookupError::AlreadyPending) => Ok(Redirect::to("/")),
        Ok(None) => Err(AppError::NotFound(format!("Sample {} not found", index))),
        Err(err) => Err(err.into()),
    }
}
