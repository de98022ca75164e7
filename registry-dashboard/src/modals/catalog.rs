//! Fixed table of dashboard modals.
//!
//! Every application event is a [`ModalEvent`] variant and
//! [`ModalCatalog::resolve`] turns it into the component to open and its props.

use crate::i18n::Translator;
use crate::models::{GenericRemovalCorpType, NameRequest, RemoveBusinessPayload};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const CLOSE_LABEL_KEY: &str = "btn.close";
pub const OK_LABEL_KEY: &str = "btn.ok";

/// Action string that selects the change-name copy of the unavailable modal.
pub const CHANGE_NAME_ACTION: &str = "change name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModalComponent {
    ManageNameRequest,
    Base,
    BaseError,
    RemoveBusiness,
}

impl ModalComponent {
    pub fn name(&self) -> &'static str {
        match self {
            ModalComponent::ManageNameRequest => "ManageNameRequest",
            ModalComponent::Base => "Base",
            ModalComponent::BaseError => "BaseError",
            ModalComponent::RemoveBusiness => "RemoveBusiness",
        }
    }
}

/// Callback attached to a modal button.
#[derive(Clone)]
pub struct ModalHandler(Arc<dyn Fn() + Send + Sync>);

impl ModalHandler {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ModalHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModalHandler")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalAction {
    pub label: String,
    #[serde(skip)]
    pub handler: ModalHandler,
}

/// Caller-defined button for the generic base modals.
#[derive(Debug, Clone, Serialize)]
pub struct ModalButton {
    pub label: String,
    #[serde(skip)]
    pub handler: Option<ModalHandler>,
}

impl ModalButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: ModalHandler) -> Self {
        self.handler = Some(handler);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCopy {
    pub title: String,
    pub description: String,
    #[serde(rename = "showContactInfo", skip_serializing_if = "Option::is_none")]
    pub show_contact_info: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalType {
    Generic,
    Passcode,
}

impl RemovalType {
    pub fn for_corp_type(code: &str) -> Self {
        if GenericRemovalCorpType::from_code(code).is_some() {
            RemovalType::Generic
        } else {
            RemovalType::Passcode
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalType::Generic => "generic",
            RemovalType::Passcode => "passcode",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ModalProps {
    ManageNameRequest {
        #[serde(rename = "nameRequest")]
        name_request: NameRequest,
    },
    Error {
        error: ErrorCopy,
        actions: Vec<ModalAction>,
    },
    RemoveBusiness {
        #[serde(rename = "removeBusinessPayload")]
        remove_business_payload: RemoveBusinessPayload,
        #[serde(rename = "type")]
        removal_type: RemovalType,
    },
    Base {
        title: String,
        description: String,
        dismissible: bool,
        buttons: Vec<ModalButton>,
    },
    BaseError {
        error: serde_json::Value,
        #[serde(rename = "i18nPrefix")]
        i18n_prefix: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        buttons: Option<Vec<ModalButton>>,
    },
}

impl ModalProps {
    /// Action buttons for the error variants; empty otherwise.
    pub fn actions(&self) -> &[ModalAction] {
        match self {
            ModalProps::Error { actions, .. } => actions.as_slice(),
            _ => &[],
        }
    }
}

/// Component plus props, ready for the overlay.
#[derive(Debug, Clone, Serialize)]
pub struct ModalRequest {
    pub component: ModalComponent,
    pub props: ModalProps,
}

impl ModalRequest {
    /// Props as JSON. A serialization failure is logged and yields `null`.
    pub fn props_json(&self) -> serde_json::Value {
        json_or_null(self.component, &self.props)
    }
}

fn json_or_null<T: Serialize>(component: ModalComponent, props: &T) -> serde_json::Value {
    serde_json::to_value(props).unwrap_or_else(|e| {
        tracing::error!(
            component = component.name(),
            error = %e,
            "Failed to serialize modal props"
        );
        serde_json::Value::Null
    })
}

/// Every event the dashboard can raise a modal for.
#[derive(Debug, Clone)]
pub enum ModalEvent {
    ManageNameRequest(NameRequest),
    ManageNrError,
    BusinessAddError,
    BusinessUnavailableError { action: String },
    RemovalConfirmation(RemoveBusinessPayload),
    Base {
        title: String,
        description: String,
        dismissible: bool,
        buttons: Vec<ModalButton>,
    },
    BaseError {
        error: serde_json::Value,
        i18n_prefix: String,
        buttons: Option<Vec<ModalButton>>,
    },
}

pub struct ModalCatalog;

impl ModalCatalog {
    /// Build the request for `event`. `close` is bound to every action button.
    pub fn resolve(event: ModalEvent, t: &dyn Translator, close: ModalHandler) -> ModalRequest {
        let action = |label_key: &str| ModalAction {
            label: t.t(label_key),
            handler: close.clone(),
        };

        match event {
            ModalEvent::ManageNameRequest(name_request) => ModalRequest {
                component: ModalComponent::ManageNameRequest,
                props: ModalProps::ManageNameRequest { name_request },
            },
            ModalEvent::ManageNrError => ModalRequest {
                component: ModalComponent::Base,
                props: ModalProps::Error {
                    error: ErrorCopy {
                        title: t.t("form.manageNR.error.default.title"),
                        description: t.t("form.manageNR.error.default.description"),
                        show_contact_info: None,
                    },
                    actions: vec![action(CLOSE_LABEL_KEY)],
                },
            },
            ModalEvent::BusinessAddError => ModalRequest {
                component: ModalComponent::Base,
                props: ModalProps::Error {
                    error: ErrorCopy {
                        title: t.t("error.businessAdd.title"),
                        description: t.t("error.businessAdd.description"),
                        show_contact_info: None,
                    },
                    actions: vec![action(CLOSE_LABEL_KEY)],
                },
            },
            ModalEvent::BusinessUnavailableError { action: requested } => {
                let copy = if requested == CHANGE_NAME_ACTION {
                    "changeName"
                } else {
                    "generic"
                };
                ModalRequest {
                    component: ModalComponent::Base,
                    props: ModalProps::Error {
                        error: ErrorCopy {
                            title: t.t(&format!("error.businessUnavailable.{}.title", copy)),
                            description: t
                                .t(&format!("error.businessUnavailable.{}.description", copy)),
                            show_contact_info: Some(true),
                        },
                        actions: vec![action(OK_LABEL_KEY)],
                    },
                }
            }
            ModalEvent::RemovalConfirmation(payload) => ModalRequest {
                component: ModalComponent::RemoveBusiness,
                props: ModalProps::RemoveBusiness {
                    removal_type: RemovalType::for_corp_type(payload.corp_type_code()),
                    remove_business_payload: payload,
                },
            },
            ModalEvent::Base {
                title,
                description,
                dismissible,
                buttons,
            } => ModalRequest {
                component: ModalComponent::Base,
                props: ModalProps::Base {
                    title,
                    description,
                    dismissible,
                    buttons,
                },
            },
            ModalEvent::BaseError {
                error,
                i18n_prefix,
                buttons,
            } => ModalRequest {
                component: ModalComponent::BaseError,
                props: ModalProps::BaseError {
                    error,
                    i18n_prefix,
                    buttons,
                },
            },
        }
    }
}
