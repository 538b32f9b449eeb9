//! # Environment Variable Loader
//!
//! Loads the build configuration from environment variables following
//! 12-factor app principles.
//!
//! # Naming Convention
//! - `TWC_CONTENT`: comma-separated glob patterns
//! - `TWC_PLUGINS`: comma-separated plugin names
//! - `TWC_THEME_EXTEND`: JSON object mapping theme keys to override values

use crate::config::{BuildConfig, ThemeConfig};
use std::env;

/// Environment loading error.
#[derive(Debug, thiserror::Error)]
pub enum EnvLoadError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Load the build configuration from environment variables.
///
/// ## Purpose
/// Environment variables override file values but can be overridden by CLI
/// arguments. Unset variables fall back to the shipped defaults.
///
/// ## Environment Variables
/// - `TWC_CONTENT`: comma-separated glob patterns
///   (e.g. `./templates/**/*.html,./static/*.js`)
/// - `TWC_PLUGINS`: comma-separated plugin names (e.g. `flowbite,typography`);
///   an empty value means no plugins
/// - `TWC_THEME_EXTEND`: JSON object of theme overrides
///   (e.g. `{"colors":{"brand":"#1a56db"}}`)
pub fn load_from_env() -> Result<BuildConfig, EnvLoadError> {
    let mut config = BuildConfig::default();

    if let Some(patterns) = parse_list_env("TWC_CONTENT") {
        config.content = patterns;
    }

    if let Ok(raw) = env::var("TWC_PLUGINS") {
        config.plugins = split_list(&raw);
    }

    if let Ok(raw) = env::var("TWC_THEME_EXTEND") {
        let extend = serde_json::from_str(&raw).map_err(|e| EnvLoadError::InvalidValue {
            var: "TWC_THEME_EXTEND".to_string(),
            reason: e.to_string(),
        })?;
        config.theme = ThemeConfig { extend };
    }

    Ok(config)
}

fn parse_list_env(key: &str) -> Option<Vec<String>> {
    let raw = env::var(key).ok()?;
    let items = split_list(&raw);
    if items.is_empty() { None } else { Some(items) }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
