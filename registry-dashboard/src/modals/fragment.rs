//! Server-side overlay: renders the opened modal to an HTML fragment.

use super::catalog::{ModalProps, ModalRequest};
use super::overlay::{Overlay, OverlayError};
use crate::i18n::Translator;
use crate::services::metrics;
use askama::Template;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub component: &'static str,
    pub title: String,
    pub description: String,
    pub lines: Vec<String>,
    pub contact_info: Option<String>,
    pub buttons: Vec<String>,
    pub dismissible: bool,
    pub removal_type: Option<&'static str>,
}

impl ModalView {
    pub fn from_request(request: &ModalRequest, t: &dyn Translator) -> Self {
        let mut view = ModalView {
            component: request.component.name(),
            title: String::new(),
            description: String::new(),
            lines: Vec::new(),
            contact_info: None,
            buttons: Vec::new(),
            dismissible: true,
            removal_type: None,
        };

        match &request.props {
            ModalProps::ManageNameRequest { name_request } => {
                view.title = t.t("modal.manageNameRequest.title");
                view.lines = name_request.names();
                if let Some(nr_num) = name_request.nr_num() {
                    view.lines.push(format!(
                        "{}: {}",
                        t.t("modal.manageNameRequest.nrNum"),
                        nr_num
                    ));
                }
                view.buttons.push(t.t("btn.close"));
            }
            ModalProps::Error { error, actions } => {
                view.title = error.title.clone();
                view.description = error.description.clone();
                if error.show_contact_info == Some(true) {
                    view.contact_info = Some(t.t("error.contactInfo"));
                }
                view.buttons = actions.iter().map(|a| a.label.clone()).collect();
            }
            ModalProps::RemoveBusiness {
                remove_business_payload,
                removal_type,
            } => {
                let kind = removal_type.as_str();
                view.title = t.t(&format!("modal.removeBusiness.{}.title", kind));
                view.description = t.t(&format!("modal.removeBusiness.{}.description", kind));
                view.lines.push(remove_business_payload.corp_type_code().to_string());
                view.removal_type = Some(kind);
                view.buttons = vec![t.t("btn.cancel"), t.t("btn.ok")];
            }
            ModalProps::Base {
                title,
                description,
                dismissible,
                buttons,
            } => {
                view.title = title.clone();
                view.description = description.clone();
                view.dismissible = *dismissible;
                view.buttons = buttons.iter().map(|b| b.label.clone()).collect();
            }
            ModalProps::BaseError {
                i18n_prefix,
                buttons,
                ..
            } => {
                view.title = t.t(&format!("{}.title", i18n_prefix));
                view.description = t.t(&format!("{}.description", i18n_prefix));
                view.buttons = match buttons {
                    Some(buttons) => buttons.iter().map(|b| b.label.clone()).collect(),
                    None => vec![t.t("btn.close")],
                };
            }
        }

        view
    }
}

#[derive(Template)]
#[template(path = "modal.html")]
struct ModalTemplate {
    view: ModalView,
}

#[derive(Debug, Default)]
struct FragmentState {
    html: Option<String>,
    closes: usize,
}

/// Overlay that keeps the markup of the last opened modal for the response body.
pub struct FragmentOverlay {
    translator: Arc<dyn Translator>,
    state: Mutex<FragmentState>,
}

impl FragmentOverlay {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            state: Mutex::new(FragmentState::default()),
        }
    }

    /// Markup of the open modal; empty once closed.
    pub fn html(&self) -> String {
        self.state
            .lock()
            .map(|state| state.html.clone().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn close_count(&self) -> usize {
        self.state.lock().map(|state| state.closes).unwrap_or_default()
    }
}

#[async_trait]
impl Overlay for FragmentOverlay {
    async fn open(&self, request: ModalRequest) -> Result<(), OverlayError> {
        let component = request.component.name();
        let view = ModalView::from_request(&request, self.translator.as_ref());
        let html = ModalTemplate { view }
            .render()
            .map_err(|e| OverlayError::Render {
                component,
                message: e.to_string(),
            })?;

        let mut state = self.state.lock().map_err(|_| OverlayError::Closed)?;
        state.html = Some(html);
        metrics::record_modal_opened(component);
        Ok(())
    }

    fn close(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.html = None;
            state.closes += 1;
        }
    }
}
