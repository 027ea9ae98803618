//! Configuration types for the comparison engine.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Algorithm used to compute the edit script between two sequences.
///
/// Every variant yields `equal` / `replace` / `delete` / `insert` runs; they
/// differ in how ties between equally short scripts are broken.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm, a minimal (longest common subsequence) script
    #[default]
    Myers,
    /// Patience diff, anchors on lines that are unique on both sides
    Patience,
    /// Classic dynamic-programming LCS (quadratic memory)
    Lcs,
}

impl DiffAlgorithm {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        }
    }
}

impl std::fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algo: DiffAlgorithm) -> Self {
        match algo {
            DiffAlgorithm::Myers => Self::Myers,
            DiffAlgorithm::Patience => Self::Patience,
            DiffAlgorithm::Lcs => Self::Lcs,
        }
    }
}

/// Configuration for per-section parallelism of the section-keyed matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Allow processing sections on the rayon thread pool
    pub enabled: bool,
    /// Minimum number of sections before going parallel
    pub min_sections: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_sections: 16,
        }
    }
}

impl ParallelConfig {
    /// Always process sections on the calling thread.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            enabled: false,
            min_sections: usize::MAX,
        }
    }

    /// Whether a document with `sections` sections should be split across threads.
    #[must_use]
    pub const fn should_parallelize(&self, sections: usize) -> bool {
        self.enabled && sections >= self.min_sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_threshold() {
        let config = ParallelConfig {
            enabled: true,
            min_sections: 4,
        };
        assert!(!config.should_parallelize(3));
        assert!(config.should_parallelize(4));
        assert!(!ParallelConfig::sequential().should_parallelize(10_000));
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(DiffAlgorithm::default(), DiffAlgorithm::Myers);
        assert_eq!(DiffAlgorithm::Patience.to_string(), "patience");
        assert_eq!(DiffAlgorithm::Lcs.name(), "lcs");
    }
}
