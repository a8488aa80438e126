use config::Config;
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Track};
use thiserror::Error;

use super::sheets_config::SpreadsheetConfig;

/// Plain variables the deployment sets, and the config keys they fill in.
const DEPLOYMENT_ENV: [(&str, &str); 5] = [
    ("GOOGLE_CLIENT_EMAIL", "sheets.client_email"),
    ("GOOGLE_PRIVATE_KEY", "sheets.private_key"),
    ("GOOGLE_SHEET_ID", "sheets.spreadsheet_id"),
    ("GOOGLE_SHEET_PAGE_NAME", "sheets.sheet_name"),
    ("PORT", "server.port"),
];

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub sheets: SpreadsheetConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: Box<str>,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> Box<str> {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    4500
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: Box<str>,
    /// Extra plain-text log file next to stdout.
    #[serde(default)]
    pub file: Option<Box<str>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> Box<str> {
    "info".into()
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read configuration sources")]
    ReadFailed,
    #[error("Failed to deserialize configuration")]
    Invalid,
}

impl AppConfig {
    /// Merges the optional config file (`CONFIG_PATH`, default `Config`), `RSVP__*`
    /// variables and the deployment variables, later sources winning.
    pub fn load() -> error_stack::Result<AppConfig, ConfigLoadError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());

        let mut builder = Config::builder()
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("RSVP")
                    .prefix_separator("__")
                    .separator("__"),
            );

        for (variable, key) in DEPLOYMENT_ENV {
            builder = builder
                .set_override_option(key, std::env::var(variable).ok())
                .change_context(ConfigLoadError::ReadFailed)
                .attach_printable_lazy(|| format!("while applying {}", variable))?;
        }

        let config = builder
            .build()
            .change_context(ConfigLoadError::ReadFailed)
            .attach_printable_lazy(|| format!("config file: {}", config_path))?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> error_stack::Result<AppConfig, ConfigLoadError> {
        let mut track = Track::new();
        let path_de = PathDeserializer::new(config, &mut track);

        AppConfig::deserialize(path_de).map_err(|e| {
            report!(ConfigLoadError::Invalid)
                .attach_printable(e.to_string())
                .attach_printable(format!("Field path: {}", track.path()))
        })
    }
}
