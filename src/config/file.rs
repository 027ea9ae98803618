//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".doc-compare.yaml",
    ".doc-compare.yml",
    "doc-compare.yaml",
    "doc-compare.yml",
];

/// Directory under the user config dir holding the global config.
const CONFIG_DIR_NAME: &str = "doc-compare";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/doc-compare/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(dir) = user_config_dir()
        && let Some(path) = find_config_in_dir(&dir)
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// The per-user config directory (`~/.config/doc-compare` on Linux).
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Default location for `config init`: the project-local file in the current directory.
#[must_use]
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAMES[0])
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml_ng::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ConfigFileError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to unit, not to a map
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override. This is how CLI
    /// args are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Comparison config
        if other.comparison.algorithm != defaults.comparison.algorithm {
            self.comparison.algorithm = other.comparison.algorithm;
        }
        if !other.comparison.parallel {
            self.comparison.parallel = false;
        }
        if other.comparison.parallel_min_sections != defaults.comparison.parallel_min_sections {
            self.comparison.parallel_min_sections = other.comparison.parallel_min_sections;
        }
        if other.comparison.allow_mixed_kinds {
            self.comparison.allow_mixed_kinds = true;
        }

        // Extraction config
        if other.extraction.keep_numeric {
            self.extraction.keep_numeric = true;
        }
        if other.extraction.max_file_size != defaults.extraction.max_file_size {
            self.extraction.max_file_size = other.extraction.max_file_size;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.title.is_some() {
            self.output.title.clone_from(&other.output.title);
        }
        if other.output.word_mode.is_some() {
            self.output.word_mode = other.output.word_mode;
        }
        if other.output.width.is_some() {
            self.output.width = other.output.width;
        }
        if other.output.max_items.is_some() {
            self.output.max_items = other.output.max_items;
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# doc-compare configuration
# Place this file at .doc-compare.yaml in your project root or ~/.config/doc-compare/

{}
",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# doc-compare Configuration File
# ===============================
#
# This file configures doc-compare behavior. Place it at:
#   - .doc-compare.yaml in your project root
#   - ~/.config/doc-compare/doc-compare.yaml for global config
#
# CLI arguments always override file settings.

# Matching engine
comparison:
  # Line alignment for flowing text: myers, patience, lcs
  algorithm: myers
  # Process slides on multiple threads
  parallel: true
  # Minimum slide count before going parallel
  parallel_min_sections: 16
  # Allow comparing e.g. a .docx against a .txt
  allow_mixed_kinds: false

# Document extraction
extraction:
  # Keep lines made only of digits (page numbers, counters)
  keep_numeric: false
  # Refuse files larger than this many bytes
  max_file_size: 268435456

# Output configuration
output:
  # Format: auto, summary, side-by-side, json, markdown, html
  format: auto
  # Output file path (omit for stdout)
  # file: report.html
  # Report title
  # title: Quarterly deck review
  # Word highlighting: positional, aligned
  # word_mode: aligned
  # Side-by-side width in columns
  # width: 160
  # Maximum number of changes to render
  # max_items: 500
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if any changes detected
  fail_on_change: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
