//! # Build Configuration System
//!
//! Centralized configuration management for the utility-CSS build pipeline.
//!
//! This crate provides:
//! - The [`BuildConfig`] structure (content globs, theme extensions, plugins)
//! - Configuration file loading (TOML/YAML/JSON)
//! - Environment variable loading (12-factor app principles)
//! - Configuration precedence (CLI > env > file > defaults)
//! - Configuration validation
//! - Plugin reference resolution
//! - Hot reload functionality
//!
//! # Best Practices
//!
//! - Uses `validator` crate for input validation
//! - Provides clear error messages for invalid configuration
//! - The loaded configuration is a plain value: cloneable, comparable,
//!   never mutated after the merge step

pub mod config;
pub mod file_loader;
pub mod hot_reload;
pub mod loader;
pub mod plugins;
pub mod precedence;
pub mod validator;

pub use self::config::{BuildConfig, ThemeConfig};
pub use self::validator::{validate, validate_strict};
pub use ::validator::Validate;
pub use file_loader::{load_from_file, load_from_json, load_from_toml, load_from_yaml};
pub use hot_reload::watch_config;
pub use loader::load_from_env;
pub use plugins::{PluginHandle, match_content, resolve, resolve_all};
pub use precedence::merge_configs;
