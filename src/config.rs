// src/config.rs
use crate::locale::LocaleCode;
use crate::utils::error::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};

const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup settings for the localization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locale active before any switch.
    pub default_locale: LocaleCode,
    /// Switch to the OS language once at startup.
    pub detect_system_locale: bool,
    pub log_level: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: LocaleCode::ZhCn,
            detect_system_locale: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl I18nConfig {
    /// Reads the config file, falling back to defaults on any problem.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            info!("Config file {:?} not found. Using default configuration.", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<I18nConfig>(&content) {
                Ok(config) => {
                    info!("Config loaded successfully from {:?}", path);
                    config
                }
                Err(e) => {
                    error!(
                        "Failed to parse config file {:?}: {}. Using default configuration.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                error!(
                    "Failed to read config file {:?}: {}. Using default configuration.",
                    path, e
                );
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        info!("Config saved successfully to {:?}", path);
        Ok(())
    }
}
