use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Business flags supplied by the caller. The form only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    #[serde(default)]
    pub is_firm: bool,
    #[serde(default)]
    pub is_corporation: bool,
    #[serde(default)]
    pub is_benefit: bool,
    #[serde(default)]
    pub is_coop: bool,
    #[validate(length(min = 1, message = "Business name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Business identifier is required"))]
    pub identifier: String,
}

/// Selects which validation rules apply to a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessVariant {
    Coop,
    Other,
}

/// Selects the copy shown by the email option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailAudience {
    CorpOrBenOrCoop,
    Firm,
    Default,
}

impl BusinessDetails {
    pub fn variant(&self) -> BusinessVariant {
        if self.is_coop {
            BusinessVariant::Coop
        } else {
            BusinessVariant::Other
        }
    }

    pub fn email_audience(&self) -> EmailAudience {
        if self.is_corporation || self.is_benefit || self.is_coop {
            EmailAudience::CorpOrBenOrCoop
        } else if self.is_firm {
            EmailAudience::Firm
        } else {
            EmailAudience::Default
        }
    }
}

/// An account that can be granted access through the delegation option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountOption {
    #[validate(length(min = 1, message = "Account uuid is required"))]
    pub uuid: String,
    #[validate(length(min = 1, message = "Account name is required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

impl AccountOption {
    pub fn display_text(&self) -> String {
        match self.branch_name.as_deref() {
            Some(branch) if !branch.is_empty() => format!("{} - {}", self.name, branch),
            _ => self.name.clone(),
        }
    }
}

/// Corp type codes whose removal only needs a generic confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericRemovalCorpType {
    NameRequest,
    IncorporationApplication,
    AmalgamationApplication,
    Registration,
    Partnership,
    SoleProp,
}

impl GenericRemovalCorpType {
    pub const ALL: [GenericRemovalCorpType; 6] = [
        GenericRemovalCorpType::NameRequest,
        GenericRemovalCorpType::IncorporationApplication,
        GenericRemovalCorpType::AmalgamationApplication,
        GenericRemovalCorpType::Registration,
        GenericRemovalCorpType::Partnership,
        GenericRemovalCorpType::SoleProp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            GenericRemovalCorpType::NameRequest => "NR",
            GenericRemovalCorpType::IncorporationApplication => "TMP",
            GenericRemovalCorpType::AmalgamationApplication => "ATMP",
            GenericRemovalCorpType::Registration => "RTMP",
            GenericRemovalCorpType::Partnership => "GP",
            GenericRemovalCorpType::SoleProp => "SP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|corp_type| corp_type.code() == code)
    }
}

/// Corp type reference as it appears inside a business record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpTypeRef {
    pub code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovableBusiness {
    pub corp_type: CorpTypeRef,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload describing a business the user wants removed from their list.
///
/// Unknown fields are kept so the payload reaches the confirmation modal verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveBusinessPayload {
    pub business: RemovableBusiness,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoveBusinessPayload {
    pub fn corp_type_code(&self) -> &str {
        &self.business.corp_type.code
    }
}

/// Name request as handed to the management modal, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRequest(pub Map<String, Value>);

impl NameRequest {
    /// Requested names. Entries may be plain strings or objects with a `name` field.
    pub fn names(&self) -> Vec<String> {
        let Some(Value::Array(names)) = self.0.get("names") else {
            return Vec::new();
        };
        names
            .iter()
            .filter_map(|entry| match entry {
                Value::String(name) => Some(name.clone()),
                Value::Object(fields) => fields.get("name")?.as_str().map(str::to_string),
                _ => None,
            })
            .collect()
    }

    pub fn nr_num(&self) -> Option<&str> {
        self.0.get("nrNum").and_then(Value::as_str)
    }
}
