pub mod config;
pub mod forms;
pub mod handlers;
pub mod i18n;
pub mod modals;
pub mod models;
pub mod services;
pub mod startup;

use i18n::Translator;
use services::directory::BusinessDirectory;
use std::sync::Arc;

/// Shared application state for the dashboard handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn BusinessDirectory>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(directory: Arc<dyn BusinessDirectory>, translator: Arc<dyn Translator>) -> Self {
        Self {
            directory,
            translator,
        }
    }
}
