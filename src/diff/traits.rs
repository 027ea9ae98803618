//! Trait definitions for line matching strategies.
//!
//! This module provides the abstraction shared by the section-keyed and
//! sequential matchers, so callers and tests can drive either one the same
//! way.

use super::LineDiff;

/// Strategy for turning two line collections into difference records.
///
/// Implementors are stateless between calls: the same inputs always
/// produce the same records.
pub trait LineMatcher: Send + Sync {
    /// Shape of the line collection this matcher consumes.
    type Lines: ?Sized;

    /// Compare the original lines against the revised lines.
    fn compare(&self, original: &Self::Lines, revised: &Self::Lines) -> Vec<LineDiff>;

    /// Get the name of this matcher for logging/debugging.
    fn name(&self) -> &'static str;
}
