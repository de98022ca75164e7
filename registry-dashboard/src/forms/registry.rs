//! Static catalog of authorization options and their field schemas.

use super::field::{FieldId, FieldKind};
use super::validation::ValidationRuleSet;
use crate::models::BusinessVariant;
use serde::{Deserialize, Serialize};

/// The mutually exclusive ways a user can prove they may manage a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthOptionKind {
    Passcode,
    Firm,
    Email,
    Delegation,
}

impl AuthOptionKind {
    pub const ALL: [AuthOptionKind; 4] = [
        AuthOptionKind::Passcode,
        AuthOptionKind::Firm,
        AuthOptionKind::Email,
        AuthOptionKind::Delegation,
    ];

    /// Slot identifier callers use to configure the option.
    pub fn slot(&self) -> &'static str {
        match self {
            AuthOptionKind::Passcode => "passcode-option",
            AuthOptionKind::Firm => "firm-option",
            AuthOptionKind::Email => "email-option",
            AuthOptionKind::Delegation => "delegation-option",
        }
    }

    pub fn from_slot(slot: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slot() == slot)
    }
}

/// (De)serializes an [`AuthOptionKind`] through its slot identifier.
pub mod slot {
    use super::AuthOptionKind;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(kind: &AuthOptionKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.slot())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AuthOptionKind, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AuthOptionKind::from_slot(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown auth option slot: {}", raw)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    /// `data-testid` suffix of the group wrapping the field.
    pub group: &'static str,
}

impl FieldDescriptor {
    pub fn max_length(&self, variant: BusinessVariant) -> Option<usize> {
        ValidationRuleSet::max_length(self.id, variant)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct AuthOption {
    pub kind: AuthOptionKind,
    pub label_key: &'static str,
    pub fields: &'static [FieldDescriptor],
}

static PASSCODE_FIELDS: [FieldDescriptor; 1] = [FieldDescriptor {
    id: FieldId::Passcode,
    kind: FieldKind::Text,
    required: true,
    group: "passcode-input",
}];

static FIRM_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor {
        id: FieldId::FirmName,
        kind: FieldKind::Text,
        required: true,
        group: "firm-input",
    },
    FieldDescriptor {
        id: FieldId::FirmCertify,
        kind: FieldKind::Checkbox,
        required: true,
        group: "firm-checkbox",
    },
];

static EMAIL_FIELDS: [FieldDescriptor; 1] = [FieldDescriptor {
    id: FieldId::Email,
    kind: FieldKind::Info,
    required: false,
    group: "email",
}];

static DELEGATION_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor {
        id: FieldId::DelegationAccount,
        kind: FieldKind::Select,
        required: true,
        group: "delegation-account",
    },
    FieldDescriptor {
        id: FieldId::DelegationMessage,
        kind: FieldKind::Textarea,
        required: false,
        group: "delegation-message",
    },
];

static OPTIONS: [AuthOption; 4] = [
    AuthOption {
        kind: AuthOptionKind::Passcode,
        label_key: "form.manageBusiness.authOption.passcode.label",
        fields: &PASSCODE_FIELDS,
    },
    AuthOption {
        kind: AuthOptionKind::Firm,
        label_key: "form.manageBusiness.authOption.firm.label",
        fields: &FIRM_FIELDS,
    },
    AuthOption {
        kind: AuthOptionKind::Email,
        label_key: "form.manageBusiness.authOption.email.label",
        fields: &EMAIL_FIELDS,
    },
    AuthOption {
        kind: AuthOptionKind::Delegation,
        label_key: "form.manageBusiness.authOption.delegation.label",
        fields: &DELEGATION_FIELDS,
    },
];

/// An option as configured by the caller: display label plus slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredOption {
    pub label: String,
    #[serde(with = "slot")]
    pub slot: AuthOptionKind,
}

impl ConfiguredOption {
    pub fn new(label: impl Into<String>, slot: AuthOptionKind) -> Self {
        Self {
            label: label.into(),
            slot,
        }
    }
}

/// A registered option paired with the label the caller chose for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableOption {
    pub label: String,
    pub option: &'static AuthOption,
}

impl AvailableOption {
    pub fn kind(&self) -> AuthOptionKind {
        self.option.kind
    }
}

pub struct AuthOptionRegistry;

impl AuthOptionRegistry {
    pub fn all() -> &'static [AuthOption] {
        &OPTIONS
    }

    pub fn resolve(kind: AuthOptionKind) -> &'static AuthOption {
        match kind {
            AuthOptionKind::Passcode => &OPTIONS[0],
            AuthOptionKind::Firm => &OPTIONS[1],
            AuthOptionKind::Email => &OPTIONS[2],
            AuthOptionKind::Delegation => &OPTIONS[3],
        }
    }

    /// Look up an option by slot string.
    ///
    /// # Panics
    ///
    /// Panics on an unknown slot. Slots coming from outside the process are
    /// rejected during deserialization, so reaching this with a bad slot is a bug.
    pub fn resolve_slot(slot: &str) -> &'static AuthOption {
        match AuthOptionKind::from_slot(slot) {
            Some(kind) => Self::resolve(kind),
            None => panic!("unknown auth option slot: {}", slot),
        }
    }

    /// Resolve the caller's options, keeping the caller's order.
    pub fn list_available(configured: &[ConfiguredOption]) -> Vec<AvailableOption> {
        configured
            .iter()
            .map(|entry| AvailableOption {
                label: entry.label.clone(),
                option: Self::resolve(entry.slot),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_matches_kind() {
        for kind in AuthOptionKind::ALL {
            assert_eq!(AuthOptionRegistry::resolve(kind).kind, kind);
            assert_eq!(AuthOptionRegistry::resolve_slot(kind.slot()).kind, kind);
        }
    }

    #[test]
    #[should_panic(expected = "unknown auth option slot")]
    fn test_resolve_unknown_slot_panics() {
        AuthOptionRegistry::resolve_slot("sms-option");
    }

    #[test]
    fn test_list_available_keeps_caller_order() {
        let configured = vec![
            ConfiguredOption::new("Email Button Label", AuthOptionKind::Email),
            ConfiguredOption::new("Passcode Button Label", AuthOptionKind::Passcode),
            ConfiguredOption::new("Firm Button Label", AuthOptionKind::Firm),
        ];

        let available = AuthOptionRegistry::list_available(&configured);
        let kinds: Vec<_> = available.iter().map(AvailableOption::kind).collect();
        assert_eq!(
            kinds,
            vec![
                AuthOptionKind::Email,
                AuthOptionKind::Passcode,
                AuthOptionKind::Firm
            ]
        );
        assert_eq!(available[1].label, "Passcode Button Label");
    }

    #[test]
    fn test_configured_option_uses_slot_strings() {
        let parsed: ConfiguredOption =
            serde_json::from_str(r#"{"label": "Delegate", "slot": "delegation-option"}"#).unwrap();
        assert_eq!(parsed.slot, AuthOptionKind::Delegation);

        let unknown =
            serde_json::from_str::<ConfiguredOption>(r#"{"label": "SMS", "slot": "sms-option"}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_schemas() {
        let firm = AuthOptionRegistry::resolve(AuthOptionKind::Firm);
        let ids: Vec<_> = firm.fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![FieldId::FirmName, FieldId::FirmCertify]);

        let passcode = &AuthOptionRegistry::resolve(AuthOptionKind::Passcode).fields[0];
        assert_eq!(passcode.max_length(BusinessVariant::Coop), Some(9));
        assert_eq!(passcode.max_length(BusinessVariant::Other), Some(15));
    }
}
