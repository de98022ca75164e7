use super::catalog::ModalRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Failed to render modal {component}: {message}")]
    Render {
        component: &'static str,
        message: String,
    },

    #[error("Overlay is no longer available")]
    Closed,
}

/// The modal rendering primitive.
///
/// `open` resolves once the overlay has finished opening the modal. Stacking or
/// serializing concurrent modals is up to the implementation.
#[async_trait]
pub trait Overlay: Send + Sync {
    async fn open(&self, request: ModalRequest) -> Result<(), OverlayError>;

    fn close(&self);
}
