//! Application configuration loading from config.toml
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables (`DATABASE_URL`, `STYLESHEET_PATH`), which `main`
//! may have populated from a `.env` file.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the stylesheet the color seeder reads.
pub const DEFAULT_STYLESHEET_PATH: &str = "static/css/site.css";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SeaORM` connection string
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Stylesheet scanned for `--name, #hex)` color variables
    #[serde(default = "default_stylesheet_path")]
    pub stylesheet_path: PathBuf,
    /// Run the seeders after creating the schema
    #[serde(default = "default_true")]
    pub seed_reference_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            stylesheet_path: default_stylesheet_path(),
            seed_reference_data: true,
        }
    }
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_stylesheet_path() -> PathBuf {
    PathBuf::from(DEFAULT_STYLESHEET_PATH)
}

const fn default_true() -> bool {
    true
}

/// Loads application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the configuration used by the binary.
///
/// `./config.toml` is optional; when it is missing the defaults are used.
/// Environment variables win over both.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    let config = if path.exists() {
        load_config(path)?
    } else {
        tracing::info!("No config.toml found, using defaults");
        AppConfig::default()
    };

    Ok(apply_env_overrides(
        config,
        std::env::var("DATABASE_URL").ok(),
        std::env::var("STYLESHEET_PATH").ok(),
    ))
}

fn apply_env_overrides(
    mut config: AppConfig,
    database_url: Option<String>,
    stylesheet_path: Option<String>,
) -> AppConfig {
    if let Some(url) = database_url.filter(|u| !u.trim().is_empty()) {
        config.database_url = url;
    }
    if let Some(path) = stylesheet_path.filter(|p| !p.trim().is_empty()) {
        config.stylesheet_path = PathBuf::from(path);
    }
    config
}
