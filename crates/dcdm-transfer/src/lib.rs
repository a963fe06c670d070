//! # dcdm-transfer
//!
//! Transfer functions (OETF/EOTF) for the Digital Cinema Distribution Master.
//!
//! DCDM encodes CIE XYZ with a 1/2.6 power law (SMPTE 428-1) and is usually
//! packaged as 12-bit integer codes in JPEG 2000 / MXF deliverables.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Code value**: Encoded value, normalized `[0, 1]` or 12-bit `[0, 4095]`
//!
//! # Usage
//!
//! ```rust
//! use dcdm_core::{with_scale, Scale};
//! use dcdm_transfer::{dcdm_eotf, dcdm_oetf, dcdm_oetf_int, dcdm_oetf_int_signal};
//!
//! let code = dcdm_oetf(0.18);
//! let linear = dcdm_eotf(code);
//! assert!((linear - 0.18).abs() < 1e-12);
//!
//! // Percent domain
//! let pct = with_scale(Scale::Hundred, || dcdm_oetf(18.0));
//! assert!((pct - code * 100.0).abs() < 1e-12);
//!
//! // 12-bit packaging
//! assert_eq!(dcdm_oetf_int(0.18), 462);
//! assert_eq!(dcdm_oetf_int_signal([0.18, 1.0]), [462, 893]);
//! ```
//!
//! # Domain-Range Scale
//!
//! Float inputs and outputs follow the scale of the current scope (see
//! [`dcdm_core::set_scale`]), or the scale carried by a [`Dcdm`] value.
//! Integer codes are absolute and never rescaled.
//!
//! # Dependencies
//!
//! - [`dcdm-core`] - Scale, signal containers
//! - [`rayon`] - Parallel buffer helpers
//!
//! # Used By
//!
//! - `dcdm-cli` - Command line encoding/decoding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dcdm;

// Re-export common functions
pub use dcdm::{
    eotf as dcdm_eotf, eotf_int as dcdm_eotf_int, eotf_int_signal as dcdm_eotf_int_signal,
    eotf_signal as dcdm_eotf_signal, oetf as dcdm_oetf, oetf_int as dcdm_oetf_int,
    oetf_int_signal as dcdm_oetf_int_signal, oetf_signal as dcdm_oetf_signal, Dcdm,
};
