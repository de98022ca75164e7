//! Modal endpoints. Each returns the rendered modal fragment for the page to mount.

use crate::modals::{BrdModals, FragmentOverlay, ModalButton, OverlayError};
use crate::models::{NameRequest, RemoveBusinessPayload};
use crate::AppState;
use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use service_core::error::AppError;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct UnavailableRequest {
    pub action: String,
}

#[derive(Deserialize)]
pub struct BaseModalRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub dismissible: bool,
    #[serde(default)]
    pub buttons: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseErrorRequest {
    pub error: serde_json::Value,
    pub i18n_prefix: String,
    pub buttons: Option<Vec<String>>,
}

fn modals_for(state: &AppState) -> (Arc<FragmentOverlay>, BrdModals) {
    let overlay = Arc::new(FragmentOverlay::new(Arc::clone(&state.translator)));
    let modals = BrdModals::new(overlay.clone(), Arc::clone(&state.translator));
    (overlay, modals)
}

fn render_failed(e: OverlayError) -> AppError {
    AppError::InternalError(anyhow::Error::new(e))
}

fn buttons(labels: Vec<String>) -> Vec<ModalButton> {
    labels.into_iter().map(ModalButton::new).collect()
}

pub async fn manage_name_request(
    State(state): State<AppState>,
    Json(name_request): Json<NameRequest>,
) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals
        .open_manage_name_request(name_request)
        .await
        .map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn manage_nr_error(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals.open_manage_nr_error().await.map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn business_add_error(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals.open_business_add_error().await.map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn business_unavailable(
    State(state): State<AppState>,
    Json(request): Json<UnavailableRequest>,
) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals
        .open_business_unavailable_error(&request.action)
        .await
        .map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn remove_business(
    State(state): State<AppState>,
    Json(payload): Json<RemoveBusinessPayload>,
) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals
        .open_business_removal_confirmation(payload)
        .await
        .map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn base_modal(
    State(state): State<AppState>,
    Json(request): Json<BaseModalRequest>,
) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals
        .open_base_modal(
            &request.title,
            &request.description,
            request.dismissible,
            buttons(request.buttons),
        )
        .await
        .map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

pub async fn base_error_modal(
    State(state): State<AppState>,
    Json(request): Json<BaseErrorRequest>,
) -> Result<Html<String>, AppError> {
    let (overlay, modals) = modals_for(&state);
    modals
        .open_base_error_modal(
            request.error,
            &request.i18n_prefix,
            request.buttons.map(buttons),
        )
        .await
        .map_err(render_failed)?;
    Ok(Html(overlay.html()))
}

/// Closing swaps the modal slot for an empty fragment.
pub async fn close(State(state): State<AppState>) -> Html<String> {
    let (overlay, modals) = modals_for(&state);
    modals.close();
    Html(overlay.html())
}
