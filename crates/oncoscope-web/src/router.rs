//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    home::{home, site_index},
    organ::{api_organ_counts, organ_info},
    substitution::substitution_page,
    predictor::{predictor_page, predictor_submit},
    histogram::histogram_page,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",             get(home))
        .route("/index",        get(site_index))
        .route("/info",         get(organ_info))
        .route("/substitution", get(substitution_page))
        .route("/predictor",    get(predictor_page).post(predictor_submit))
        .route("/histo",        get(histogram_page))

        // API endpoints
        .route("/organ/{name}", get(api_organ_counts))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
