// File: crates/chart-web/src/error.rs
// Summary: Web error type with status-code mapping for handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("dataset not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Plot(#[from] chart_plot::PlotError),

    #[error("upload failed: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("render failed: {0}")]
    Render(#[from] anyhow::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) | WebError::Plot(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Multipart(_) => StatusCode::BAD_REQUEST,
            WebError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, error = %self, "request failed");
        (status, Html(format!("<h1>{}</h1>", escape(&self.to_string())))).into_response()
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub type Result<T> = std::result::Result<T, WebError>;
