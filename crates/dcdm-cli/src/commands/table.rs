//! Table command.
//!
//! Prints evenly spaced linear values with their DCDM code values.

use anyhow::{bail, Result};
use dcdm_transfer::Dcdm;
use tracing::{info, trace};

use super::format_value;
use crate::TableArgs;

pub fn run(args: TableArgs, verbose: u8) -> Result<()> {
    trace!(steps = args.steps, "table::run");
    let codec = Dcdm::current();
    let rows = table_rows(codec, args.steps)?;
    info!(scale = %codec.scale, rows = rows.len(), "Building DCDM table");

    if verbose > 0 {
        println!("scale: {}", codec.scale);
    }
    println!("{:>12}  {:>12}  {:>6}", "linear", "code", "12-bit");
    for (x, v, code) in rows {
        println!("{:>12}  {:>12}  {:>6}", format_value(x), format_value(v), code);
    }

    Ok(())
}

/// Samples `[0, 1]` (in the codec's scale) at `steps + 1` points.
///
/// Each row is `(linear, code value, 12-bit code)`.
fn table_rows(codec: Dcdm, steps: u32) -> Result<Vec<(f64, f64, u16)>> {
    if steps == 0 {
        bail!("--steps must be at least 1");
    }

    let factor = codec.scale.factor();
    let linear: Vec<f64> = (0..=steps)
        .map(|i| i as f64 / steps as f64 * factor)
        .collect();
    let encoded = codec.oetf_signal(linear.as_slice());
    let codes = codec.encode_codes(&linear);

    Ok(linear
        .into_iter()
        .zip(encoded)
        .zip(codes)
        .map(|((x, v), code)| (x, v, code))
        .collect())
}
