//! Field rules for the add-business form.
//!
//! Rules depend on the field and on the business variant. Every failure maps to a
//! translation key; nothing here produces display text.

use super::field::{FieldId, FieldValue};
use crate::models::{AccountOption, BusinessDetails, BusinessVariant};

pub const PASSCODE_COOP_LENGTH: usize = 9;
pub const PASSCODE_MIN_LENGTH: usize = 9;
pub const PASSCODE_MAX_LENGTH: usize = 15;
pub const DELEGATION_MESSAGE_MAX_LENGTH: usize = 400;

const OPTION_PREFIX: &str = "form.manageBusiness.authOption";

/// Translation keys for every rule failure.
pub mod keys {
    pub const PASSCODE_COOP_REQUIRED: &str =
        "form.manageBusiness.authOption.passcode.fields.passcode.error.coop.required";
    pub const PASSCODE_COOP_LENGTH: &str =
        "form.manageBusiness.authOption.passcode.fields.passcode.error.coop.length";
    pub const PASSCODE_COOP_TYPE: &str =
        "form.manageBusiness.authOption.passcode.fields.passcode.error.coop.type";
    pub const PASSCODE_DEFAULT_REQUIRED: &str =
        "form.manageBusiness.authOption.passcode.fields.passcode.error.default.required";
    pub const PASSCODE_DEFAULT_LENGTH: &str =
        "form.manageBusiness.authOption.passcode.fields.passcode.error.default.length";
    pub const FIRM_NAME_REQUIRED: &str =
        "form.manageBusiness.authOption.firm.fields.name.error.required";
    pub const FIRM_CERTIFY: &str = "form.manageBusiness.authOption.firm.fields.certify.error";
    pub const DELEGATION_ACCOUNT_REQUIRED: &str =
        "form.manageBusiness.authOption.delegation.fields.account.error.required";
    pub const DELEGATION_MESSAGE_MAX_LENGTH: &str =
        "form.manageBusiness.authOption.delegation.fields.message.error.maxLength";
}

/// Why a passcode was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeError {
    Required,
    Length,
    /// Contains something other than digits. Only raised for coops.
    Type,
}

impl PasscodeError {
    pub fn message_key(&self, variant: BusinessVariant) -> &'static str {
        match (variant, self) {
            (BusinessVariant::Coop, PasscodeError::Required) => keys::PASSCODE_COOP_REQUIRED,
            (BusinessVariant::Coop, PasscodeError::Length) => keys::PASSCODE_COOP_LENGTH,
            (BusinessVariant::Coop, PasscodeError::Type) => keys::PASSCODE_COOP_TYPE,
            (BusinessVariant::Other, PasscodeError::Required) => keys::PASSCODE_DEFAULT_REQUIRED,
            (BusinessVariant::Other, _) => keys::PASSCODE_DEFAULT_LENGTH,
        }
    }
}

/// A failed rule: the field and the translation key of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub key: &'static str,
}

/// What the rules need to know beyond the field value itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub business: &'a BusinessDetails,
    pub accounts: &'a [AccountOption],
}

impl<'a> ValidationContext<'a> {
    pub fn new(business: &'a BusinessDetails, accounts: &'a [AccountOption]) -> Self {
        Self { business, accounts }
    }
}

pub struct ValidationRuleSet;

impl ValidationRuleSet {
    /// Check one field against its rule. A missing value is treated as empty.
    pub fn validate(
        field: FieldId,
        value: Option<&FieldValue>,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), FieldError> {
        let text = value.map(FieldValue::as_text).unwrap_or_default();
        let fail = |key| Err(FieldError { field, key });

        match field {
            FieldId::Passcode => {
                let variant = ctx.business.variant();
                match Self::validate_passcode(text, variant) {
                    Ok(()) => Ok(()),
                    Err(e) => fail(e.message_key(variant)),
                }
            }
            FieldId::FirmName => {
                if text.trim().is_empty() {
                    fail(keys::FIRM_NAME_REQUIRED)
                } else {
                    Ok(())
                }
            }
            FieldId::FirmCertify => {
                if value.map(FieldValue::as_flag).unwrap_or(false) {
                    Ok(())
                } else {
                    fail(keys::FIRM_CERTIFY)
                }
            }
            FieldId::Email => Ok(()),
            FieldId::DelegationAccount => {
                if ctx.accounts.iter().any(|account| account.uuid == text) && !text.is_empty() {
                    Ok(())
                } else {
                    fail(keys::DELEGATION_ACCOUNT_REQUIRED)
                }
            }
            FieldId::DelegationMessage => {
                if text.chars().count() > DELEGATION_MESSAGE_MAX_LENGTH {
                    fail(keys::DELEGATION_MESSAGE_MAX_LENGTH)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Coops need exactly nine digits. Any non-digit input is a type error
    /// whatever its length; a digit string of the wrong length is a length
    /// error. Everything else needs 9 to 15 digits, and any miss is reported
    /// as a length error.
    pub fn validate_passcode(passcode: &str, variant: BusinessVariant) -> Result<(), PasscodeError> {
        if passcode.trim().is_empty() {
            return Err(PasscodeError::Required);
        }

        let length = passcode.chars().count();
        let all_digits = passcode.chars().all(|c| c.is_ascii_digit());

        match variant {
            BusinessVariant::Coop => {
                if !all_digits {
                    Err(PasscodeError::Type)
                } else if length != PASSCODE_COOP_LENGTH {
                    Err(PasscodeError::Length)
                } else {
                    Ok(())
                }
            }
            BusinessVariant::Other => {
                if (PASSCODE_MIN_LENGTH..=PASSCODE_MAX_LENGTH).contains(&length) && all_digits {
                    Ok(())
                } else {
                    Err(PasscodeError::Length)
                }
            }
        }
    }

    /// Longest value the input element accepts, if capped.
    pub fn max_length(field: FieldId, variant: BusinessVariant) -> Option<usize> {
        match (field, variant) {
            (FieldId::Passcode, BusinessVariant::Coop) => Some(PASSCODE_COOP_LENGTH),
            (FieldId::Passcode, BusinessVariant::Other) => Some(PASSCODE_MAX_LENGTH),
            (FieldId::DelegationMessage, _) => Some(DELEGATION_MESSAGE_MAX_LENGTH),
            _ => None,
        }
    }

    /// Key of a per-variant passcode attribute (`help`, `placeholder`, `arialabel`).
    pub fn passcode_copy_key(attribute: &str, variant: BusinessVariant) -> String {
        let suffix = match variant {
            BusinessVariant::Coop => "coop",
            BusinessVariant::Other => "default",
        };
        format!(
            "{}.passcode.fields.passcode.{}.{}",
            OPTION_PREFIX, attribute, suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(is_coop: bool) -> BusinessDetails {
        BusinessDetails {
            is_coop,
            name: "Business Name".to_string(),
            identifier: "1234567890".to_string(),
            ..Default::default()
        }
    }

    fn accounts() -> Vec<AccountOption> {
        vec![AccountOption {
            uuid: "123".to_string(),
            name: "name1".to_string(),
            branch_name: Some("branch1".to_string()),
        }]
    }

    fn check(field: FieldId, value: FieldValue, business: &BusinessDetails) -> Option<&'static str> {
        let accounts = accounts();
        let ctx = ValidationContext::new(business, &accounts);
        ValidationRuleSet::validate(field, Some(&value), &ctx)
            .err()
            .map(|e| e.key)
    }

    #[test]
    fn test_coop_passcode_rules() {
        let coop = business(true);
        assert_eq!(check(FieldId::Passcode, "".into(), &coop), Some(keys::PASSCODE_COOP_REQUIRED));
        assert_eq!(check(FieldId::Passcode, "123".into(), &coop), Some(keys::PASSCODE_COOP_LENGTH));
        assert_eq!(check(FieldId::Passcode, "ertertert".into(), &coop), Some(keys::PASSCODE_COOP_TYPE));
        assert_eq!(check(FieldId::Passcode, "123456789".into(), &coop), None);
        assert_eq!(check(FieldId::Passcode, "abc".into(), &coop), Some(keys::PASSCODE_COOP_TYPE));
        assert_eq!(
            check(FieldId::Passcode, "1234567890".into(), &coop),
            Some(keys::PASSCODE_COOP_LENGTH)
        );
    }

    #[test]
    fn test_other_passcode_has_no_type_error() {
        let other = business(false);
        assert_eq!(check(FieldId::Passcode, "".into(), &other), Some(keys::PASSCODE_DEFAULT_REQUIRED));
        assert_eq!(check(FieldId::Passcode, "123".into(), &other), Some(keys::PASSCODE_DEFAULT_LENGTH));
        assert_eq!(
            check(FieldId::Passcode, "ertertert".into(), &other),
            Some(keys::PASSCODE_DEFAULT_LENGTH)
        );
        assert_eq!(check(FieldId::Passcode, "123456789".into(), &other), None);
        assert_eq!(check(FieldId::Passcode, "123456789012345".into(), &other), None);
        assert_eq!(
            check(FieldId::Passcode, "1234567890123456".into(), &other),
            Some(keys::PASSCODE_DEFAULT_LENGTH)
        );
    }

    #[test]
    fn test_firm_fields() {
        let firm = business(false);
        assert_eq!(check(FieldId::FirmName, "   ".into(), &firm), Some(keys::FIRM_NAME_REQUIRED));
        assert_eq!(check(FieldId::FirmName, "Some Name".into(), &firm), None);
        assert_eq!(check(FieldId::FirmCertify, false.into(), &firm), Some(keys::FIRM_CERTIFY));
        assert_eq!(check(FieldId::FirmCertify, true.into(), &firm), None);
    }

    #[test]
    fn test_missing_value_counts_as_empty() {
        let firm = business(false);
        let accounts = accounts();
        let ctx = ValidationContext::new(&firm, &accounts);
        let err = ValidationRuleSet::validate(FieldId::FirmCertify, None, &ctx).unwrap_err();
        assert_eq!(err.field, FieldId::FirmCertify);
        assert_eq!(err.key, keys::FIRM_CERTIFY);
    }

    #[test]
    fn test_delegation_account_must_be_supplied() {
        let other = business(false);
        assert_eq!(
            check(FieldId::DelegationAccount, "".into(), &other),
            Some(keys::DELEGATION_ACCOUNT_REQUIRED)
        );
        assert_eq!(
            check(FieldId::DelegationAccount, "999".into(), &other),
            Some(keys::DELEGATION_ACCOUNT_REQUIRED)
        );
        assert_eq!(check(FieldId::DelegationAccount, "123".into(), &other), None);
    }

    #[test]
    fn test_delegation_message_is_capped() {
        let other = business(false);
        assert_eq!(check(FieldId::DelegationMessage, "".into(), &other), None);
        assert_eq!(check(FieldId::DelegationMessage, "a".repeat(400).into(), &other), None);
        assert_eq!(
            check(FieldId::DelegationMessage, "a".repeat(401).into(), &other),
            Some(keys::DELEGATION_MESSAGE_MAX_LENGTH)
        );
    }

    #[test]
    fn test_max_length_per_variant() {
        assert_eq!(ValidationRuleSet::max_length(FieldId::Passcode, BusinessVariant::Coop), Some(9));
        assert_eq!(ValidationRuleSet::max_length(FieldId::Passcode, BusinessVariant::Other), Some(15));
        assert_eq!(
            ValidationRuleSet::max_length(FieldId::DelegationMessage, BusinessVariant::Other),
            Some(400)
        );
        assert_eq!(ValidationRuleSet::max_length(FieldId::FirmName, BusinessVariant::Other), None);
    }

    #[test]
    fn test_passcode_copy_key() {
        assert_eq!(
            ValidationRuleSet::passcode_copy_key("help", BusinessVariant::Coop),
            "form.manageBusiness.authOption.passcode.fields.passcode.help.coop"
        );
    }
}
