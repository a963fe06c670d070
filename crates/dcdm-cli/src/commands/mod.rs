//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod table;

use anyhow::{bail, Result};
use dcdm_transfer::dcdm::CODE_MAX;

/// Checks that every value is a whole 12-bit code.
pub fn ensure_codes(values: &[f64]) -> Result<Vec<u16>> {
    values
        .iter()
        .map(|&v| {
            if v.fract() != 0.0 || !(0.0..=CODE_MAX as f64).contains(&v) {
                bail!("{} is not a 12-bit code (expected an integer in 0..={})", v, CODE_MAX);
            }
            Ok(v as u16)
        })
        .collect()
}

/// Formats a float result with enough digits for 7-decimal comparison.
pub fn format_value(v: f64) -> String {
    if v.is_finite() {
        format!("{:.8}", v)
    } else {
        format!("{}", v)
    }
}

/// One output line: the bare result, or `input -> result` when verbose.
pub fn format_row(verbose: u8, input: f64, output: &str) -> String {
    if verbose > 0 {
        format!("  {} -> {}", input, output)
    } else {
        output.to_string()
    }
}
