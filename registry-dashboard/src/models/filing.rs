use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a registry filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilingStatus {
    Active,
    Approved,
    AwaitingReview,
    ChangeRequested,
    Draft,
    Rejected,
    Pending,
    Paid,
    Withdrawn,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 9] = [
        FilingStatus::Active,
        FilingStatus::Approved,
        FilingStatus::AwaitingReview,
        FilingStatus::ChangeRequested,
        FilingStatus::Draft,
        FilingStatus::Rejected,
        FilingStatus::Pending,
        FilingStatus::Paid,
        FilingStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Active => "ACTIVE",
            FilingStatus::Approved => "APPROVED",
            FilingStatus::AwaitingReview => "AWAITING_REVIEW",
            FilingStatus::ChangeRequested => "CHANGE_REQUESTED",
            FilingStatus::Draft => "DRAFT",
            FilingStatus::Rejected => "REJECTED",
            FilingStatus::Pending => "PENDING",
            FilingStatus::Paid => "PAID",
            FilingStatus::Withdrawn => "WITHDRAWN",
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filing status: {0}")]
pub struct UnknownFilingStatus(pub String);

impl FromStr for FilingStatus {
    type Err = UnknownFilingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownFilingStatus(s.to_string()))
    }
}

/// Incorporation Application filing loaded from / saved to the Legal API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorporationFiling {
    pub header: FilingHeader,
    pub business: FilingBusiness,
    /// Application body; the dashboard does not inspect it.
    pub incorporation_application: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingHeader {
    pub name: String,
    pub certified_by: String,
    pub date: String,
    /// Only set for future effective filings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// Absent while a new filing is being built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folio_number: Option<String>,
    pub is_future_effective: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FilingStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingBusiness {
    pub legal_type: String,
    pub identifier: String,
}

impl IncorporationFiling {
    pub fn is_draft(&self) -> bool {
        self.header.status == Some(FilingStatus::Draft)
    }
}
