//! Decode command (EOTF).
//!
//! Converts DCDM code values, normalized or 12-bit, back to linear XYZ.

use anyhow::Result;
use dcdm_transfer::Dcdm;
use tracing::{debug, info, trace};

use super::{ensure_codes, format_row, format_value};
use crate::DecodeArgs;

pub fn run(args: DecodeArgs, verbose: u8) -> Result<()> {
    let codec = Dcdm::current();
    trace!(count = args.values.len(), int = args.int, "decode::run");
    info!(scale = %codec.scale, values = args.values.len(), "Decoding DCDM");

    let rows = decode_rows(codec, &args.values, args.int, verbose)?;

    if verbose > 0 {
        println!("DCDM EOTF (scale: {})", codec.scale);
    }
    for row in rows {
        println!("{}", row);
    }

    Ok(())
}

/// Decodes `values` and formats one output line per value.
///
/// With `int`, every value must be a whole 12-bit code.
fn decode_rows(codec: Dcdm, values: &[f64], int: bool, verbose: u8) -> Result<Vec<String>> {
    let decoded = if int {
        let codes = ensure_codes(values)?;
        codec.decode_codes(&codes)
    } else {
        codec.eotf_signal(values)
    };

    Ok(values
        .iter()
        .zip(decoded)
        .map(|(&x, v)| {
            debug!(input = x, output = v, "decoded");
            format_row(verbose, x, &format_value(v))
        })
        .collect())
}
