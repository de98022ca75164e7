use super::field::{FieldId, FieldValue};
use super::registry::{AuthOptionKind, AuthOptionRegistry, FieldDescriptor};
use super::validation::{FieldError, ValidationContext, ValidationRuleSet};
use std::collections::{BTreeMap, BTreeSet};

/// Mutable state of one add-business form instance.
///
/// Error and alert visibility are never stored; they are derived from the
/// current values every time they are asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    selected: Option<AuthOptionKind>,
    values: BTreeMap<FieldId, FieldValue>,
    touched: BTreeSet<FieldId>,
    submit_attempted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(kind: AuthOptionKind) -> Self {
        Self {
            selected: Some(kind),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<AuthOptionKind> {
        self.selected
    }

    pub fn select(&mut self, kind: AuthOptionKind) {
        self.selected = Some(kind);
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: FieldId) -> &str {
        self.value(field).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.touched.iter().copied()
    }

    pub fn attempt_submit(&mut self) {
        self.submit_attempted = true;
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn no_option_alert(&self) -> bool {
        self.submit_attempted && self.selected.is_none()
    }

    /// Fields of the selected option, in schema order.
    pub fn active_fields(&self) -> &'static [FieldDescriptor] {
        match self.selected {
            Some(kind) => AuthOptionRegistry::resolve(kind).fields,
            None => &[],
        }
    }

    fn is_active(&self, field: FieldId) -> bool {
        self.active_fields().iter().any(|f| f.id == field)
    }

    /// Rule result for a field regardless of whether it should be shown.
    pub fn field_error(&self, field: FieldId, ctx: &ValidationContext<'_>) -> Option<FieldError> {
        ValidationRuleSet::validate(field, self.value(field), ctx).err()
    }

    /// Message key to render next to a field, if any.
    pub fn error_for(&self, field: FieldId, ctx: &ValidationContext<'_>) -> Option<&'static str> {
        if !self.is_active(field) {
            return None;
        }
        if !(self.submit_attempted || self.is_touched(field)) {
            return None;
        }
        self.field_error(field, ctx).map(|e| e.key)
    }

    /// Every failing field of the selected option.
    pub fn errors(&self, ctx: &ValidationContext<'_>) -> Vec<FieldError> {
        self.active_fields()
            .iter()
            .filter_map(|f| self.field_error(f.id, ctx))
            .collect()
    }

    pub fn is_valid(&self, ctx: &ValidationContext<'_>) -> bool {
        self.selected.is_some() && self.errors(ctx).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::keys;
    use crate::models::BusinessDetails;

    fn coop() -> BusinessDetails {
        BusinessDetails {
            is_coop: true,
            name: "Coop".to_string(),
            identifier: "CP0001".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pristine_field_shows_nothing() {
        let business = coop();
        let ctx = ValidationContext::new(&business, &[]);
        let state = FormState::with_selection(AuthOptionKind::Passcode);

        assert!(state.field_error(FieldId::Passcode, &ctx).is_some());
        assert_eq!(state.error_for(FieldId::Passcode, &ctx), None);
    }

    #[test]
    fn test_touched_field_shows_current_error() {
        let business = coop();
        let ctx = ValidationContext::new(&business, &[]);
        let mut state = FormState::with_selection(AuthOptionKind::Passcode);

        state.set_value(FieldId::Passcode, "123");
        state.touch(FieldId::Passcode);
        assert_eq!(state.error_for(FieldId::Passcode, &ctx), Some(keys::PASSCODE_COOP_LENGTH));

        state.set_value(FieldId::Passcode, "123456789");
        assert_eq!(state.error_for(FieldId::Passcode, &ctx), None);
    }

    #[test]
    fn test_submit_reveals_untouched_errors() {
        let business = coop();
        let ctx = ValidationContext::new(&business, &[]);
        let mut state = FormState::with_selection(AuthOptionKind::Firm);

        state.attempt_submit();
        assert_eq!(state.error_for(FieldId::FirmName, &ctx), Some(keys::FIRM_NAME_REQUIRED));
        assert_eq!(state.error_for(FieldId::FirmCertify, &ctx), Some(keys::FIRM_CERTIFY));
        assert_eq!(state.errors(&ctx).len(), 2);
        assert!(!state.is_valid(&ctx));

        state.set_value(FieldId::FirmName, "Some Name");
        state.set_value(FieldId::FirmCertify, true);
        assert_eq!(state.error_for(FieldId::FirmName, &ctx), None);
        assert!(state.is_valid(&ctx));
    }

    #[test]
    fn test_inactive_fields_never_report() {
        let business = coop();
        let ctx = ValidationContext::new(&business, &[]);
        let mut state = FormState::with_selection(AuthOptionKind::Email);
        state.attempt_submit();

        assert_eq!(state.error_for(FieldId::Passcode, &ctx), None);
        assert!(state.is_valid(&ctx));
    }

    #[test]
    fn test_no_option_alert() {
        let mut state = FormState::new();
        assert!(!state.no_option_alert());

        state.attempt_submit();
        assert!(state.no_option_alert());

        state.select(AuthOptionKind::Passcode);
        assert!(!state.no_option_alert());
        assert!(state.submit_attempted());
    }
}
