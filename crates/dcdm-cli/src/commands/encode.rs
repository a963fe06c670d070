//! Encode command (OETF).
//!
//! Converts linear XYZ values to DCDM code values, normalized or 12-bit.

use anyhow::Result;
use dcdm_transfer::Dcdm;
use tracing::{debug, info, trace};

use super::{format_row, format_value};
use crate::EncodeArgs;

pub fn run(args: EncodeArgs, verbose: u8) -> Result<()> {
    let codec = Dcdm::current();
    trace!(count = args.values.len(), int = args.int, "encode::run");
    info!(scale = %codec.scale, values = args.values.len(), "Encoding DCDM");

    if verbose > 0 {
        println!("DCDM OETF (scale: {})", codec.scale);
    }
    for row in encode_rows(codec, &args.values, args.int, verbose) {
        println!("{}", row);
    }

    Ok(())
}

/// Encodes `values` and formats one output line per value.
fn encode_rows(codec: Dcdm, values: &[f64], int: bool, verbose: u8) -> Vec<String> {
    if int {
        let codes = codec.encode_codes(values);
        values
            .iter()
            .zip(codes)
            .map(|(&x, code)| {
                debug!(input = x, code, "encoded");
                format_row(verbose, x, &code.to_string())
            })
            .collect()
    } else {
        codec
            .oetf_signal(values)
            .into_iter()
            .zip(values)
            .map(|(v, &x)| {
                debug!(input = x, output = v, "encoded");
                format_row(verbose, x, &format_value(v))
            })
            .collect()
    }
}
