use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector (e.g., http://tempo:4317). Traces stay local when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_service_name() -> String {
    "registry-dashboard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct DashboardSettings {
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en-CA".to_string()
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct DirectorySettings {
    /// JSON file of add-business props, relative to the crate directory.
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

impl DirectorySettings {
    pub fn resolve_fixtures(&self, crate_dir: &Path) -> Option<PathBuf> {
        self.fixtures_path.as_ref().map(|path| crate_dir.join(path))
    }
}

/// Directory holding `config/`, whether started from the workspace root or the crate.
pub fn crate_directory() -> Result<PathBuf, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    if base_path.ends_with("registry-dashboard") {
        Ok(base_path)
    } else {
        Ok(base_path.join("registry-dashboard"))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let configuration_directory = crate_directory()?.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
