//! Configuration module for doc-compare.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use doc_compare::config::{AppConfig, ConfigPreset, Validatable};
//! use doc_compare::diff::DiffAlgorithm;
//!
//! let config = AppConfig::from_preset(ConfigPreset::CiCd);
//! assert!(config.behavior.fail_on_change);
//!
//! let config = AppConfig::builder()
//!     .algorithm(DiffAlgorithm::Patience)
//!     .keep_numeric(true)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.doc-compare.yaml` file in your project root or `~/.config/doc-compare/`:
//!
//! ```yaml
//! comparison:
//!   algorithm: patience
//! output:
//!   format: markdown
//! behavior:
//!   fail_on_change: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, ComparePaths, ComparisonConfig,
    ExtractConfig, ExtractFormat, ExtractionConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.doc-compare.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
