//! Compare command handler.
//!
//! Implements the `compare` subcommand for comparing two documents.

use crate::config::CompareConfig;
use crate::diff::CompareResult;
use crate::pipeline::{
    check_compatible_inputs, compute_comparison, exit_codes, extract_with_context, output_report,
};
use anyhow::Result;

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    check_compatible_inputs(
        &config.paths.original,
        &config.paths.revised,
        config.comparison.allow_mixed_kinds,
    )?;

    let options = config.extraction.options();
    let original = extract_with_context(&config.paths.original, &options, quiet)?;
    let revised = extract_with_context(&config.paths.revised, &options, quiet)?;

    let result = compute_comparison(&config, &original, &revised)?;
    output_report(&config, &result, &original, &revised)?;

    Ok(determine_exit_code(&config, &result))
}

/// Determine the appropriate exit code based on the result and config flags.
fn determine_exit_code(config: &CompareConfig, result: &CompareResult) -> i32 {
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
