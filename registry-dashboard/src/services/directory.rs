//! Source of the props each add-business form is mounted with.
//!
//! Business lookups against the Legal API live outside the dashboard; the
//! in-memory directory is seeded from a JSON fixture file instead.

use crate::forms::AddBusinessProps;
use anyhow::Context;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::path::Path;
use validator::Validate;

pub trait BusinessDirectory: Send + Sync {
    fn find(&self, identifier: &str) -> Option<AddBusinessProps>;

    fn identifiers(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    businesses: BTreeMap<String, AddBusinessProps>,
}

impl InMemoryDirectory {
    /// Build a directory, validating each entry's shape once.
    pub fn new(entries: Vec<AddBusinessProps>) -> Result<Self, AppError> {
        let mut businesses = BTreeMap::new();
        for entry in entries {
            entry.validate()?;
            businesses.insert(entry.identifier.clone(), entry);
        }
        Ok(Self { businesses })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read business fixtures at {}", path.display()))
            .map_err(AppError::ConfigError)?;
        let entries: Vec<AddBusinessProps> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid business fixtures in {}", path.display()))
            .map_err(AppError::ConfigError)?;

        let directory = Self::new(entries)?;
        tracing::info!(
            path = %path.display(),
            count = directory.businesses.len(),
            "Loaded business directory"
        );
        Ok(directory)
    }
}

impl BusinessDirectory for InMemoryDirectory {
    fn find(&self, identifier: &str) -> Option<AddBusinessProps> {
        self.businesses.get(identifier).cloned()
    }

    fn identifiers(&self) -> Vec<String> {
        self.businesses.keys().cloned().collect()
    }
}
