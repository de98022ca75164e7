use super::catalog::{ModalButton, ModalCatalog, ModalEvent, ModalHandler};
use super::overlay::{Overlay, OverlayError};
use crate::i18n::Translator;
use crate::models::{NameRequest, RemoveBusinessPayload};
use std::sync::Arc;

/// Opens dashboard modals for application events.
///
/// Holds no state of its own; every call builds a fresh request and hands it
/// to the overlay.
#[derive(Clone)]
pub struct BrdModals {
    overlay: Arc<dyn Overlay>,
    translator: Arc<dyn Translator>,
}

impl BrdModals {
    pub fn new(overlay: Arc<dyn Overlay>, translator: Arc<dyn Translator>) -> Self {
        Self {
            overlay,
            translator,
        }
    }

    async fn open(&self, event: ModalEvent) -> Result<(), OverlayError> {
        let overlay = Arc::downgrade(&self.overlay);
        let close = ModalHandler::new(move || {
            if let Some(overlay) = overlay.upgrade() {
                overlay.close();
            }
        });

        let request = ModalCatalog::resolve(event, self.translator.as_ref(), close);
        tracing::info!(
            component = request.component.name(),
            locale = self.translator.locale(),
            "Opening modal"
        );

        self.overlay.open(request).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to open modal");
            e
        })
    }

    pub async fn open_manage_name_request(
        &self,
        name_request: NameRequest,
    ) -> Result<(), OverlayError> {
        self.open(ModalEvent::ManageNameRequest(name_request)).await
    }

    pub async fn open_manage_nr_error(&self) -> Result<(), OverlayError> {
        self.open(ModalEvent::ManageNrError).await
    }

    pub async fn open_business_add_error(&self) -> Result<(), OverlayError> {
        self.open(ModalEvent::BusinessAddError).await
    }

    pub async fn open_business_unavailable_error(&self, action: &str) -> Result<(), OverlayError> {
        self.open(ModalEvent::BusinessUnavailableError {
            action: action.to_string(),
        })
        .await
    }

    pub async fn open_business_removal_confirmation(
        &self,
        payload: RemoveBusinessPayload,
    ) -> Result<(), OverlayError> {
        self.open(ModalEvent::RemovalConfirmation(payload)).await
    }

    pub async fn open_base_modal(
        &self,
        title: &str,
        description: &str,
        dismissible: bool,
        buttons: Vec<ModalButton>,
    ) -> Result<(), OverlayError> {
        self.open(ModalEvent::Base {
            title: title.to_string(),
            description: description.to_string(),
            dismissible,
            buttons,
        })
        .await
    }

    pub async fn open_base_error_modal(
        &self,
        error: serde_json::Value,
        i18n_prefix: &str,
        buttons: Option<Vec<ModalButton>>,
    ) -> Result<(), OverlayError> {
        self.open(ModalEvent::BaseError {
            error,
            i18n_prefix: i18n_prefix.to_string(),
            buttons,
        })
        .await
    }

    pub fn close(&self) {
        self.overlay.close();
    }
}
