use serde::{Deserialize, Serialize};

/// Every input the add-business form can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Passcode,
    FirmName,
    FirmCertify,
    Email,
    DelegationAccount,
    DelegationMessage,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Passcode,
        FieldId::FirmName,
        FieldId::FirmCertify,
        FieldId::Email,
        FieldId::DelegationAccount,
        FieldId::DelegationMessage,
    ];

    /// Name used for the input element and in the submitted payload.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Passcode => "passcode",
            FieldId::FirmName => "partner.name",
            FieldId::FirmCertify => "partner.certify",
            FieldId::Email => "email",
            FieldId::DelegationAccount => "delegation.account",
            FieldId::DelegationMessage => "delegation.message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Select,
    Textarea,
    /// Read-only copy, never validated.
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => matches!(text.as_str(), "true" | "on"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}
