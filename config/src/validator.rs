//! # Configuration Validation
//!
//! Validates the build configuration using the `validator` crate and maps
//! validation failures into the loader's error taxonomy.

use crate::config::BuildConfig;
use errors::MalformedConfigError;
use validator::Validate;

/// Validate the build configuration.
///
/// ## Validation Rules
/// - `content`: at least one pattern; every entry a syntactically valid glob
/// - `plugins`: names must be non-empty (registry membership is checked by
///   [`crate::plugins::resolve_all`])
pub fn validate(config: &BuildConfig) -> Result<(), validator::ValidationErrors> {
    config.validate()
}

/// Validate and map failures into [`MalformedConfigError`].
///
/// Returns the first violation, in field order, so diagnostics name a
/// single problem at a time.
pub fn validate_strict(config: &BuildConfig) -> Result<(), MalformedConfigError> {
    let Err(errors) = config.validate() else {
        return Ok(());
    };

    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            return Err(match (field.as_ref(), error.code.as_ref()) {
                ("content", "length") => MalformedConfigError::EmptyContent,
                ("content", "invalid_glob") => MalformedConfigError::InvalidGlob {
                    pattern: error
                        .params
                        .get("pattern")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    reason: "pattern does not parse as a glob".to_string(),
                },
                ("plugins", "empty_plugin_name") => MalformedConfigError::MissingField {
                    field: "plugins[].name".to_string(),
                },
                (field, code) => MalformedConfigError::UnexpectedShape {
                    reason: format!("{field}: {code}"),
                },
            });
        }
    }

    // validate() returned Err but produced no field errors
    Err(MalformedConfigError::UnexpectedShape {
        reason: "unknown validation failure".to_string(),
    })
}
