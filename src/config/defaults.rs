//! Default configurations and presets for doc-compare.
//!
//! Provides named presets for common use cases.

use super::types::{AppConfig, BehaviorConfig, ComparisonConfig, ExtractionConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings for interactive use
    Default,
    /// CI/CD: machine-readable output, fail on changes
    CiCd,
    /// Strict: keep every extracted line, fail on changes
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "strict" | "exact" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Terminal output with page-number noise filtered out",
            Self::CiCd => "JSON output, no color, exit code 1 when documents differ",
            Self::Strict => "Keeps numeric lines and fails on any change",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on any changes
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            comparison: ComparisonConfig::default(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: true,
            },
        }
    }

    /// Strict preset.
    ///
    /// Every extracted line counts, including page numbers and counters.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            comparison: ComparisonConfig::default(),
            extraction: ExtractionConfig {
                keep_numeric: true,
                ..ExtractionConfig::default()
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::CiCd.name(), "ci-cd");
        assert_eq!(ConfigPreset::Strict.to_string(), "strict");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("exact"), Some(ConfigPreset::Strict));
        assert_eq!(ConfigPreset::from_name("default"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("invalid"), None);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.fail_on_change);
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_strict_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Strict);
        assert!(config.extraction.keep_numeric);
        assert!(config.behavior.fail_on_change);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }

    #[test]
    fn test_all_presets_round_trip_names() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
    }
}
