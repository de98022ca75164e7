use crate::forms::{AddBusinessForm, AuthOptionKind, FieldId, FieldValue, FormView, SubmitOutcome};
use crate::services::metrics;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "add_business.html")]
pub struct AddBusinessTemplate {
    pub form: FormView,
}

/// What the browser wants done with the posted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    /// Re-render after a selection, input or blur.
    #[default]
    Update,
    Submit,
}

/// Form fields as posted by the page. Unchecked checkboxes are absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostedForm {
    pub auth_option: Option<AuthOptionKind>,
    pub values: Vec<(FieldId, FieldValue)>,
    pub touched: Vec<FieldId>,
    pub submit_attempted: bool,
    pub intent: Intent,
}

impl PostedForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut posted = PostedForm::default();

        for (key, value) in pairs {
            match key.as_str() {
                "authOption" => {
                    if value.is_empty() {
                        continue;
                    }
                    let kind = AuthOptionKind::from_slot(&value).ok_or_else(|| {
                        AppError::BadRequest(anyhow::anyhow!("Unknown auth option: {}", value))
                    })?;
                    posted.auth_option = Some(kind);
                }
                "touched" | "blur" => {
                    let field = FieldId::from_name(&value).ok_or_else(|| {
                        AppError::BadRequest(anyhow::anyhow!("Unknown field: {}", value))
                    })?;
                    if !posted.touched.contains(&field) {
                        posted.touched.push(field);
                    }
                }
                "submitAttempted" => posted.submit_attempted = value == "true",
                "intent" => {
                    posted.intent = match value.as_str() {
                        "submit" => Intent::Submit,
                        "update" => Intent::Update,
                        other => {
                            return Err(AppError::BadRequest(anyhow::anyhow!(
                                "Unknown intent: {}",
                                other
                            )))
                        }
                    }
                }
                name => match FieldId::from_name(name) {
                    Some(FieldId::FirmCertify) => posted
                        .values
                        .push((FieldId::FirmCertify, FieldValue::Flag(is_checked(&value)))),
                    Some(field) => posted.values.push((field, FieldValue::Text(value))),
                    None => tracing::debug!(field = %name, "Ignoring unknown form field"),
                },
            }
        }

        Ok(posted)
    }

    /// Replay the posted interaction onto a freshly mounted form.
    pub fn apply(&self, form: &mut AddBusinessForm) {
        if let Some(kind) = self.auth_option {
            form.select_option(kind);
        }
        for (field, value) in &self.values {
            form.input(*field, value.clone());
        }
        for field in &self.touched {
            form.blur(*field);
        }
        if self.submit_attempted {
            form.attempt_submit();
        }
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true")
}

fn mount(state: &AppState, identifier: &str) -> Result<AddBusinessForm, AppError> {
    let props = state.directory.find(identifier).ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Business {} not found", identifier))
    })?;
    Ok(AddBusinessForm::new(props))
}

pub async fn add_business_page(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<AddBusinessTemplate, AppError> {
    let form = mount(&state, &identifier)?;
    Ok(AddBusinessTemplate {
        form: form.view(state.translator.as_ref()),
    })
}

pub async fn add_business_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let posted = PostedForm::from_pairs(pairs)?;
    let mut form = mount(&state, &identifier)?;
    posted.apply(&mut form);

    if posted.intent == Intent::Update {
        let template = AddBusinessTemplate {
            form: form.view(state.translator.as_ref()),
        };
        return Ok(template.into_response());
    }

    let outcome = form.submit();
    metrics::record_submission(outcome.label());

    match outcome {
        SubmitOutcome::Submitted(payload) => {
            tracing::info!(
                identifier = %identifier,
                option = payload.option_selected.slot(),
                "Business authorization accepted"
            );
            Ok(Json(payload).into_response())
        }
        _ => {
            let template = AddBusinessTemplate {
                form: form.view(state.translator.as_ref()),
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}
