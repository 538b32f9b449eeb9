//! # Build Configuration Structures
//!
//! Defines the configuration record consumed by the utility-CSS build
//! pipeline.
//!
//! All configuration structures:
//! - Use `serde` for serialization/deserialization
//! - Use `validator` for input validation
//! - Are plain values: `Clone + PartialEq`, constructed once and read-only
//!   thereafter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Top-level build configuration for the utility-CSS pipeline.
///
/// ## Purpose
/// Tells the class scanner which template files to inspect, which design
/// tokens to override, and which plugins extend the generated output.
///
/// ## Usage
/// ```rust
/// use config::BuildConfig;
///
/// let config = BuildConfig::default();
/// assert!(!config.content.is_empty());
/// ```
///
/// ## Fields
/// - `content`: ordered glob patterns selecting files scanned for
///   utility-class usage; must contain at least one pattern or the scanner
///   produces no output
/// - `theme`: design-token overrides merged into the generator defaults
/// - `plugins`: ordered plugin references, resolved by name against the
///   plugin registry
///
/// ## Validation
/// `content` must be non-empty and every entry must be a syntactically valid
/// glob. Plugin names must be non-empty. Registry membership is checked
/// separately by [`crate::plugins::resolve_all`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BuildConfig {
    /// Glob patterns selecting source files to scan for class usage
    #[serde(default = "default_content")]
    #[validate(
        length(min = 1, message = "content must contain at least one pattern"),
        custom(function = "validate_content_globs")
    )]
    pub content: Vec<String>,

    /// Theme overrides merged into the default design-token set
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Plugin references, resolved by name at load time
    #[serde(default = "default_plugins")]
    #[validate(custom(function = "validate_plugin_names"))]
    pub plugins: Vec<String>,
}

/// Theme configuration.
///
/// ## Fields
/// - `extend`: mapping from theme key (e.g. "colors", "spacing") to an
///   override value; empty by default, meaning the generator defaults are
///   used unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    /// Design-token overrides, keyed by theme section
    #[serde(default)]
    pub extend: BTreeMap<String, serde_json::Value>,
}

fn default_content() -> Vec<String> {
    vec![
        "./internal/components/**/*.templ".to_string(),
        "./node_modules/flowbite/**/*.js".to_string(),
    ]
}

fn default_plugins() -> Vec<String> {
    vec!["flowbite".to_string()]
}

fn validate_content_globs(patterns: &Vec<String>) -> Result<(), validator::ValidationError> {
    for pattern in patterns {
        if glob::Pattern::new(pattern).is_err() {
            let mut err = validator::ValidationError::new("invalid_glob");
            err.add_param("pattern".into(), pattern);
            return Err(err);
        }
    }
    Ok(())
}

fn validate_plugin_names(names: &Vec<String>) -> Result<(), validator::ValidationError> {
    for name in names {
        if name.trim().is_empty() {
            return Err(validator::ValidationError::new("empty_plugin_name"));
        }
    }
    Ok(())
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            theme: ThemeConfig::default(),
            plugins: default_plugins(),
        }
    }
}

impl BuildConfig {
    /// Whether the configuration references the named plugin.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }

    /// Whether any design tokens are overridden.
    pub fn extends_theme(&self) -> bool {
        !self.theme.extend.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = BuildConfig::default();
        assert_eq!(
            config.content,
            vec![
                "./internal/components/**/*.templ",
                "./node_modules/flowbite/**/*.js"
            ]
        );
        assert!(config.theme.extend.is_empty());
        assert_eq!(config.plugins, vec!["flowbite"]);
    }

    #[test]
    fn test_default_config_validates() {
        let config = BuildConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_content_rejected() {
        let config = BuildConfig {
            content: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let config = BuildConfig {
            content: vec!["./src/[".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_globs_accepted() {
        let config = BuildConfig {
            content: vec![
                "./templates/**/*.html".to_string(),
                "./assets/*.js".to_string(),
                "src/pages/[ab]*.tsx".to_string(),
            ],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_plugin_name_rejected() {
        let config = BuildConfig {
            plugins: vec!["flowbite".to_string(), "  ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_plugins_is_valid() {
        let config = BuildConfig {
            plugins: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_has_plugin() {
        let config = BuildConfig::default();
        assert!(config.has_plugin("flowbite"));
        assert!(!config.has_plugin("typography"));
    }

    #[test]
    fn test_extends_theme() {
        let mut config = BuildConfig::default();
        assert!(!config.extends_theme());

        config.theme.extend.insert(
            "colors".to_string(),
            serde_json::json!({ "brand": "#1a56db" }),
        );
        assert!(config.extends_theme());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let mut config = BuildConfig::default();
        config.theme.extend.insert(
            "spacing".to_string(),
            serde_json::json!({ "128": "32rem" }),
        );

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_reference_scenario() {
        // The shipped defaults: two content globs, empty theme extension,
        // one plugin. Loading must expose exactly these values unchanged.
        let config = BuildConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.content.len(), 2);
        assert_eq!(config.content[0], "./internal/components/**/*.templ");
        assert_eq!(config.content[1], "./node_modules/flowbite/**/*.js");
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.plugins, vec!["flowbite"]);
    }
}
