//! # Configuration Precedence
//!
//! Merges configuration from multiple sources with precedence rules.
//!
//! # Precedence Order
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)

use crate::config::BuildConfig;

/// Merge multiple configuration sources with precedence.
///
/// ## Purpose
/// Merges configuration from multiple sources following precedence rules:
/// CLI arguments > environment variables > config file > defaults.
///
/// ## Deep Merge
/// `content` and `plugins` are replaced wholesale by a higher-priority
/// source that deviates from the defaults. `theme.extend` is merged per
/// key, so a source can override a single theme section without clobbering
/// the rest.
///
/// ## Usage
/// ```rust,no_run
/// use config::{BuildConfig, load_from_env, load_from_file, merge_configs};
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let defaults = BuildConfig::default();
///     let from_file = load_from_file(Path::new("twconf.toml"))?;
///     let from_env = load_from_env()?;
///
///     let _config = merge_configs(defaults, from_file, "file", from_env, "env", None, "cli");
///     Ok(())
/// }
/// ```
pub fn merge_configs(
    defaults: BuildConfig,
    file_config: BuildConfig,
    file_source_name: &str,
    env_config: BuildConfig,
    env_source_name: &str,
    cli_config: Option<BuildConfig>,
    cli_source_name: &str,
) -> BuildConfig {
    let mut config = defaults;

    config = merge_with_logging(config, file_config, file_source_name);
    config = merge_with_logging(config, env_config, env_source_name);

    if let Some(cli) = cli_config {
        config = merge_with_logging(config, cli, cli_source_name);
    }

    config
}

fn merge_with_logging(
    mut base: BuildConfig,
    override_config: BuildConfig,
    source_name: &str,
) -> BuildConfig {
    let defaults = BuildConfig::default();
    let mut changes = Vec::new();

    if override_config.content != defaults.content && override_config.content != base.content {
        changes.push(format!("content = {:?}", override_config.content));
        base.content = override_config.content;
    }

    if override_config.plugins != defaults.plugins && override_config.plugins != base.plugins {
        changes.push(format!("plugins = {:?}", override_config.plugins));
        base.plugins = override_config.plugins;
    }

    for (key, value) in override_config.theme.extend {
        if base.theme.extend.get(&key) != Some(&value) {
            changes.push(format!("theme.extend.{key} = {value}"));
            base.theme.extend.insert(key, value);
        }
    }

    if !changes.is_empty() {
        tracing::info!("Configuration from {}: {:?}", source_name, changes);
    }

    base
}
