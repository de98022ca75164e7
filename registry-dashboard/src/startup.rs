use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    add_business::{add_business_handler, add_business_page},
    app::{health_check, index},
    metrics::metrics,
    modals,
};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    let modal_routes = Router::new()
        .route("/manage-name-request", post(modals::manage_name_request))
        .route("/manage-nr-error", post(modals::manage_nr_error))
        .route("/business-add-error", post(modals::business_add_error))
        .route("/business-unavailable", post(modals::business_unavailable))
        .route("/remove-business", post(modals::remove_business))
        .route("/base", post(modals::base_modal))
        .route("/base-error", post(modals::base_error_modal))
        .route("/close", post(modals::close));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route(
            "/businesses/:identifier/add",
            get(add_business_page).post(add_business_handler),
        )
        .nest("/modals", modal_routes)
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
