use axum::{http::header, response::IntoResponse};

/// Prometheus text exposition of the dashboard counters.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        crate::services::metrics::get_metrics(),
    )
}
