//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod compare;
mod extract;

pub use compare::run_compare;
pub use extract::{render_extraction, run_extract};

// Re-export config types used by handlers
pub use crate::config::{CompareConfig, ExtractConfig};
