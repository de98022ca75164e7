pub mod catalog;
pub mod fragment;
pub mod orchestrator;
pub mod overlay;

pub use catalog::{
    ModalAction, ModalButton, ModalCatalog, ModalComponent, ModalEvent, ModalHandler, ModalProps,
    ModalRequest, RemovalType,
};
pub use fragment::FragmentOverlay;
pub use orchestrator::BrdModals;
pub use overlay::{Overlay, OverlayError};
