//! The add-business authorization form.
//!
//! Wraps a [`FormState`] with the caller's props, decides how the option
//! selector is laid out, gates submission, and derives everything a renderer
//! needs through [`AddBusinessForm::view`].

use super::field::{FieldId, FieldKind, FieldValue};
use super::registry::{
    AuthOptionKind, AuthOptionRegistry, AvailableOption, ConfiguredOption, FieldDescriptor,
};
use super::state::FormState;
use super::validation::{FieldError, ValidationContext, ValidationRuleSet};
use crate::i18n::Translator;
use crate::models::{AccountOption, BusinessDetails, EmailAudience};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use validator::{Validate, ValidationError};

/// Help, cancel and submit.
pub const CHROME_CONTROLS: usize = 3;

const KEY_PREFIX: &str = "form.manageBusiness";

/// Everything the caller hands the form when it is mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddBusinessProps {
    #[serde(default)]
    #[validate(custom(function = "validate_unique_slots"))]
    pub auth_options: Vec<ConfiguredOption>,
    #[validate(nested)]
    pub business_details: BusinessDetails,
    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: String,
    #[serde(default)]
    #[validate(nested)]
    pub accounts: Vec<AccountOption>,
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
}

fn validate_unique_slots(options: &[ConfiguredOption]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if options.iter().all(|option| seen.insert(option.slot)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_auth_option"))
    }
}

/// How the option selector is presented, derived once from the option count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLayout<'a> {
    Empty,
    Single(&'a AvailableOption),
    Selector(&'a [AvailableOption]),
}

/// Payload handed to the caller after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBusinessPayload {
    pub option_selected: AuthOptionKind,
    pub values: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    NoOptionSelected,
    Invalid(Vec<FieldError>),
    Submitted(AddBusinessPayload),
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::NoOptionSelected => "no_option",
            SubmitOutcome::Invalid(_) => "invalid",
            SubmitOutcome::Submitted(_) => "submitted",
        }
    }
}

pub struct AddBusinessForm {
    props: AddBusinessProps,
    options: Vec<AvailableOption>,
    state: FormState,
}

impl AddBusinessForm {
    pub fn new(props: AddBusinessProps) -> Self {
        let options = AuthOptionRegistry::list_available(&props.auth_options);
        let state = match options.as_slice() {
            [only] => FormState::with_selection(only.kind()),
            _ => FormState::new(),
        };

        Self {
            props,
            options,
            state,
        }
    }

    pub fn props(&self) -> &AddBusinessProps {
        &self.props
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn ctx(&self) -> ValidationContext<'_> {
        ValidationContext::new(&self.props.business_details, &self.props.accounts)
    }

    pub fn effective_options(&self) -> OptionLayout<'_> {
        match self.options.as_slice() {
            [] => OptionLayout::Empty,
            [only] => OptionLayout::Single(only),
            many => OptionLayout::Selector(many),
        }
    }

    pub fn shows_selector(&self) -> bool {
        matches!(self.effective_options(), OptionLayout::Selector(_))
    }

    pub fn selected(&self) -> Option<AuthOptionKind> {
        self.state.selected()
    }

    /// Select an option. Options the caller did not offer are ignored.
    pub fn select_option(&mut self, kind: AuthOptionKind) -> bool {
        if !self.options.iter().any(|option| option.kind() == kind) {
            tracing::warn!(
                identifier = %self.props.identifier,
                slot = kind.slot(),
                "Ignoring selection of an auth option that was not offered"
            );
            return false;
        }
        self.state.select(kind);
        true
    }

    /// Value typed into a field, not yet committed.
    pub fn input(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.state.set_value(field, value);
    }

    pub fn blur(&mut self, field: FieldId) {
        self.state.touch(field);
    }

    /// Committed value change, as from a checkbox or select.
    pub fn change(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.state.set_value(field, value);
        self.state.touch(field);
    }

    pub fn select_account(&mut self, uuid: &str) {
        self.change(FieldId::DelegationAccount, uuid);
    }

    /// Mark the form as already submitted once without evaluating it.
    pub fn attempt_submit(&mut self) {
        self.state.attempt_submit();
    }

    pub fn no_option_alert_visible(&self) -> bool {
        self.state.no_option_alert()
    }

    pub fn error_for(&self, field: FieldId) -> Option<&'static str> {
        self.state.error_for(field, &self.ctx())
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid(&self.ctx())
    }

    /// Buttons on screen: the chrome plus the account select when delegating.
    pub fn control_count(&self) -> usize {
        match self.state.selected() {
            Some(AuthOptionKind::Delegation) => CHROME_CONTROLS + 1,
            _ => CHROME_CONTROLS,
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.state.attempt_submit();

        let Some(kind) = self.state.selected() else {
            tracing::info!(
                identifier = %self.props.identifier,
                "Add business submit without an auth option"
            );
            return SubmitOutcome::NoOptionSelected;
        };

        let errors = self.state.errors(&self.ctx());
        if !errors.is_empty() {
            tracing::info!(
                identifier = %self.props.identifier,
                slot = kind.slot(),
                error_count = errors.len(),
                "Add business submit failed validation"
            );
            return SubmitOutcome::Invalid(errors);
        }

        let values = AuthOptionRegistry::resolve(kind)
            .fields
            .iter()
            .map(|field| (field.id.name().to_string(), self.payload_value(field)))
            .collect();

        tracing::info!(
            identifier = %self.props.identifier,
            slot = kind.slot(),
            "Add business form submitted"
        );

        SubmitOutcome::Submitted(AddBusinessPayload {
            option_selected: kind,
            values,
        })
    }

    fn payload_value(&self, field: &FieldDescriptor) -> FieldValue {
        match field.kind {
            FieldKind::Checkbox => FieldValue::Flag(
                self.state
                    .value(field.id)
                    .map(FieldValue::as_flag)
                    .unwrap_or(false),
            ),
            FieldKind::Info => FieldValue::Text(self.props.contact_email.clone()),
            _ => FieldValue::Text(self.state.text(field.id).to_string()),
        }
    }

    pub fn view(&self, t: &dyn Translator) -> FormView {
        let layout = self.effective_options();

        let radios = match layout {
            OptionLayout::Selector(options) => options
                .iter()
                .map(|option| RadioView {
                    value: option.kind().slot(),
                    label: option_label(option, t),
                    checked: self.state.selected() == Some(option.kind()),
                })
                .collect(),
            _ => Vec::new(),
        };

        let option_heading = match layout {
            OptionLayout::Single(option) => Some(option_label(option, t)),
            _ => None,
        };

        let groups = self
            .state
            .active_fields()
            .iter()
            .map(|field| self.group_view(field, t))
            .collect();

        FormView {
            identifier: self.props.identifier.clone(),
            business_name: self.props.business_details.name.clone(),
            legend: t.t(&format!("{}.legend", KEY_PREFIX)),
            selected_slot: self.state.selected().map(|kind| kind.slot()),
            radios,
            option_heading,
            no_option_alert: self
                .no_option_alert_visible()
                .then(|| t.t(&format!("{}.noOptionAlert", KEY_PREFIX))),
            groups,
            submit_attempted: self.state.submit_attempted(),
            touched: self.state.touched().map(|field| field.name()).collect(),
            help_label: t.t("btn.help"),
            cancel_label: t.t("btn.cancel"),
            submit_label: t.t(&format!("{}.submitBtn", KEY_PREFIX)),
            control_count: self.control_count(),
        }
    }

    fn group_view(&self, field: &FieldDescriptor, t: &dyn Translator) -> GroupView {
        let error = self.error_for(field.id).map(|key| t.t(key));
        let variant = self.props.business_details.variant();
        let mut group = GroupView::new(field.group);

        match field.id {
            FieldId::Passcode => {
                group.help = Some(t.t(&ValidationRuleSet::passcode_copy_key("help", variant)));
                group.input = Some(InputView {
                    name: field.id.name(),
                    value: self.state.text(field.id).to_string(),
                    placeholder: t.t(&ValidationRuleSet::passcode_copy_key("placeholder", variant)),
                    aria_label: t.t(&ValidationRuleSet::passcode_copy_key("arialabel", variant)),
                    max_length: field.max_length(variant),
                });
            }
            FieldId::FirmName => {
                let prefix = option_key(AuthOptionKind::Firm, "fields.name");
                group.help = Some(t.t(&format!("{}.help", prefix)));
                group.input = Some(InputView {
                    name: field.id.name(),
                    value: self.state.text(field.id).to_string(),
                    placeholder: t.t(&format!("{}.placeholder", prefix)),
                    aria_label: t.t(&format!("{}.arialabel", prefix)),
                    max_length: field.max_length(variant),
                });
            }
            FieldId::FirmCertify => {
                group.checkbox = Some(CheckboxView {
                    name: field.id.name(),
                    label: t.t(&option_key(AuthOptionKind::Firm, "fields.certify.label")),
                    checked: self
                        .state
                        .value(field.id)
                        .map(FieldValue::as_flag)
                        .unwrap_or(false),
                });
            }
            FieldId::Email => {
                let audience = match self.props.business_details.email_audience() {
                    EmailAudience::CorpOrBenOrCoop => "corpOrBenOrCoop",
                    EmailAudience::Firm => "firm",
                    EmailAudience::Default => "default",
                };
                group.info = Some(InfoView {
                    sent_to: t.t(&option_key(
                        AuthOptionKind::Email,
                        &format!("sentTo.{}", audience),
                    )),
                    contact_email: self.props.contact_email.clone(),
                    instructions: t.t(&option_key(AuthOptionKind::Email, "instructions")),
                });
            }
            FieldId::DelegationAccount => {
                let prefix = option_key(AuthOptionKind::Delegation, "fields.account");
                let current = self.state.text(field.id);
                let chosen = self
                    .props
                    .accounts
                    .iter()
                    .find(|account| !current.is_empty() && account.uuid == current);
                let base_label = t.t(&format!("{}.arialabel", prefix));

                group.label = Some(t.t(&format!("{}.label", prefix)));
                group.select = Some(SelectView {
                    name: field.id.name(),
                    aria_label: match chosen {
                        Some(account) => format!(
                            "{}: {}, {}",
                            base_label,
                            t.t(&format!("{}.currentSelection", prefix)),
                            account.name
                        ),
                        None => base_label,
                    },
                    placeholder: t.t(&format!("{}.placeholder", prefix)),
                    selected_text: chosen.map(AccountOption::display_text),
                    options: self
                        .props
                        .accounts
                        .iter()
                        .map(|account| SelectOptionView {
                            value: account.uuid.clone(),
                            text: account.display_text(),
                            selected: chosen.is_some_and(|c| c.uuid == account.uuid),
                        })
                        .collect(),
                });
            }
            FieldId::DelegationMessage => {
                let prefix = option_key(AuthOptionKind::Delegation, "fields.message");
                group.label = Some(t.t(&format!("{}.label", prefix)));
                group.help = Some(t.t(&format!("{}.help", prefix)));
                group.textarea = Some(TextareaView {
                    name: field.id.name(),
                    value: self.state.text(field.id).to_string(),
                    placeholder: t.t(&format!("{}.placeholder", prefix)),
                    max_length: field.max_length(variant),
                });
            }
        }

        // help text gives way to the error message
        if error.is_some() {
            group.help = None;
        }
        group.error = error;
        group
    }
}

fn option_key(kind: AuthOptionKind, suffix: &str) -> String {
    let option = match kind {
        AuthOptionKind::Passcode => "passcode",
        AuthOptionKind::Firm => "firm",
        AuthOptionKind::Email => "email",
        AuthOptionKind::Delegation => "delegation",
    };
    format!("{}.authOption.{}.{}", KEY_PREFIX, option, suffix)
}

fn option_label(option: &AvailableOption, t: &dyn Translator) -> String {
    if option.label.is_empty() {
        t.t(option.option.label_key)
    } else {
        option.label.clone()
    }
}

/// Render-ready snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub identifier: String,
    pub business_name: String,
    pub legend: String,
    pub selected_slot: Option<&'static str>,
    pub radios: Vec<RadioView>,
    /// Caller label shown instead of radios when exactly one option exists.
    pub option_heading: Option<String>,
    pub no_option_alert: Option<String>,
    pub groups: Vec<GroupView>,
    pub submit_attempted: bool,
    pub touched: Vec<&'static str>,
    pub help_label: String,
    pub cancel_label: String,
    pub submit_label: String,
    pub control_count: usize,
}

impl FormView {
    pub fn group(&self, test_id: &str) -> Option<&GroupView> {
        self.groups.iter().find(|group| group.test_id == test_id)
    }

    pub fn radio(&self, value: &str) -> Option<&RadioView> {
        self.radios.iter().find(|radio| radio.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioView {
    pub value: &'static str,
    pub label: String,
    pub checked: bool,
}

/// One field group. Exactly one of the control slots is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub test_id: &'static str,
    pub label: Option<String>,
    pub help: Option<String>,
    pub error: Option<String>,
    pub input: Option<InputView>,
    pub checkbox: Option<CheckboxView>,
    pub select: Option<SelectView>,
    pub textarea: Option<TextareaView>,
    pub info: Option<InfoView>,
}

impl GroupView {
    fn new(test_id: &'static str) -> Self {
        Self {
            test_id,
            label: None,
            help: None,
            error: None,
            input: None,
            checkbox: None,
            select: None,
            textarea: None,
            info: None,
        }
    }

    /// All visible text in the group, in document order.
    pub fn text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.label.as_deref());
        if let Some(checkbox) = &self.checkbox {
            parts.push(&checkbox.label);
        }
        if let Some(select) = &self.select {
            parts.extend(select.selected_text.as_deref());
        }
        if let Some(info) = &self.info {
            parts.extend([
                info.sent_to.as_str(),
                info.contact_email.as_str(),
                info.instructions.as_str(),
            ]);
        }
        parts.extend(self.help.as_deref());
        parts.extend(self.error.as_deref());
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub name: &'static str,
    pub value: String,
    pub placeholder: String,
    pub aria_label: String,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub name: &'static str,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub name: &'static str,
    pub aria_label: String,
    pub placeholder: String,
    pub selected_text: Option<String>,
    pub options: Vec<SelectOptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptionView {
    pub value: String,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextareaView {
    pub name: &'static str,
    pub value: String,
    pub placeholder: String,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoView {
    pub sent_to: String,
    pub contact_email: String,
    pub instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::keys;
    use crate::i18n::KeyTranslator;

    fn props(options: &[(&str, AuthOptionKind)]) -> AddBusinessProps {
        AddBusinessProps {
            auth_options: options
                .iter()
                .map(|(label, kind)| ConfiguredOption::new(*label, *kind))
                .collect(),
            business_details: BusinessDetails {
                name: "Business Name".to_string(),
                identifier: "1234567890".to_string(),
                ..Default::default()
            },
            contact_email: "test@email.com".to_string(),
            accounts: vec![],
            identifier: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_props_boundary_validation() {
        let good = props(&[("Passcode", AuthOptionKind::Passcode)]);
        assert!(good.validate().is_ok());

        let mut duplicated = good.clone();
        duplicated
            .auth_options
            .push(ConfiguredOption::new("Again", AuthOptionKind::Passcode));
        assert!(duplicated.validate().is_err());

        let mut bad_email = good;
        bad_email.contact_email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_layout_follows_option_count() {
        let empty = AddBusinessForm::new(props(&[]));
        assert_eq!(empty.effective_options(), OptionLayout::Empty);
        assert_eq!(empty.selected(), None);

        let single = AddBusinessForm::new(props(&[("Firm", AuthOptionKind::Firm)]));
        assert!(matches!(single.effective_options(), OptionLayout::Single(_)));
        assert_eq!(single.selected(), Some(AuthOptionKind::Firm));

        let many = AddBusinessForm::new(props(&[
            ("Passcode", AuthOptionKind::Passcode),
            ("Firm", AuthOptionKind::Firm),
        ]));
        assert!(many.shows_selector());
        assert_eq!(many.selected(), None);
    }

    #[test]
    fn test_unoffered_option_is_ignored() {
        let mut form = AddBusinessForm::new(props(&[
            ("Passcode", AuthOptionKind::Passcode),
            ("Firm", AuthOptionKind::Firm),
        ]));
        assert!(!form.select_option(AuthOptionKind::Delegation));
        assert_eq!(form.selected(), None);
        assert!(form.select_option(AuthOptionKind::Firm));
        assert_eq!(form.selected(), Some(AuthOptionKind::Firm));
    }

    #[test]
    fn test_firm_submit_payload() {
        let mut form = AddBusinessForm::new(props(&[("Firm", AuthOptionKind::Firm)]));
        form.change(FieldId::FirmName, "Some Name");
        form.change(FieldId::FirmCertify, true);

        let SubmitOutcome::Submitted(payload) = form.submit() else {
            panic!("expected a payload");
        };
        assert_eq!(payload.option_selected, AuthOptionKind::Firm);
        assert_eq!(
            payload.values.get("partner.name"),
            Some(&FieldValue::Text("Some Name".to_string()))
        );
        assert_eq!(payload.values.get("partner.certify"), Some(&FieldValue::Flag(true)));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["optionSelected"], "firm");
        assert_eq!(json["values"]["partner.certify"], true);
    }

    #[test]
    fn test_email_submit_carries_contact_email() {
        let mut form = AddBusinessForm::new(props(&[("Email", AuthOptionKind::Email)]));
        let SubmitOutcome::Submitted(payload) = form.submit() else {
            panic!("expected a payload");
        };
        assert_eq!(
            payload.values.get("email"),
            Some(&FieldValue::Text("test@email.com".to_string()))
        );
    }

    #[test]
    fn test_invalid_submit_lists_errors() {
        let mut form = AddBusinessForm::new(props(&[("Passcode", AuthOptionKind::Passcode)]));
        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(vec![FieldError {
                field: FieldId::Passcode,
                key: keys::PASSCODE_DEFAULT_REQUIRED,
            }])
        );
        assert_eq!(outcome.label(), "invalid");
        assert!(!form.no_option_alert_visible());
    }

    #[test]
    fn test_view_hides_help_while_error_shows() {
        let mut form = AddBusinessForm::new(props(&[("Passcode", AuthOptionKind::Passcode)]));
        let t = KeyTranslator;

        let before = form.view(&t);
        let group = before.group("passcode-input").unwrap();
        assert!(group.help.is_some());
        assert!(group.error.is_none());

        form.submit();
        let after = form.view(&t);
        let group = after.group("passcode-input").unwrap();
        assert!(group.help.is_none());
        assert_eq!(group.error.as_deref(), Some(keys::PASSCODE_DEFAULT_REQUIRED));
    }

    #[test]
    fn test_empty_caller_label_falls_back_to_registry_label() {
        let form = AddBusinessForm::new(props(&[("", AuthOptionKind::Email)]));
        let view = form.view(&KeyTranslator);
        assert_eq!(
            view.option_heading.as_deref(),
            Some("form.manageBusiness.authOption.email.label")
        );
    }
}
