// File: crates/chart-web/src/router.rs
// Summary: Route table, body limit, and request tracing.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{chart_png, chart_svg, dataset_page, index, not_found, upload};
use crate::state::AppState;

/// Upload size cap, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/d/:id", get(dataset_page))
        .route("/d/:id/chart.svg", get(chart_svg))
        .route("/d/:id/chart.png", get(chart_png))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
