//! SMPTE 428-1 Digital Cinema Distribution Master (DCDM) encoding.
//!
//! DCDM stores CIE XYZ tristimulus values with a pure 1/2.6 power law,
//! normalized so that a code value of 1.0 corresponds to 52.37 cd/m2.
//! Packaging pipelines carry the result as 12-bit integer codes.
//!
//! # Formula
//!
//! ```text
//! OETF: XYZ' = (XYZ / 52.37)^(1/2.6)
//! EOTF: XYZ  = 52.37 * XYZ'^2.6
//! 12-bit: code = round(4095 * XYZ')
//! ```
//!
//! No clamping is done on float values: negative inputs produce NaN and
//! infinities propagate, exactly as the IEEE-754 power function behaves.
//!
//! # Range
//!
//! - Linear: [0, 1] normalized XYZ (1.0 encodes to ~0.2182, code 893)
//! - Encoded: [0, 1], 12-bit [0, 4095]
//!
//! # Reference
//!
//! SMPTE 428-1:2006, D-Cinema Distribution Master - Image Characteristics
//!
//! # Usage
//!
//! ```rust
//! use dcdm_transfer::dcdm;
//!
//! let code = dcdm::oetf(0.18);
//! assert!((code - 0.11281861).abs() < 1e-7);
//!
//! // Same shape out as in
//! let rows: [[f64; 3]; 2] = dcdm::eotf_signal([[0.11281861; 3]; 2]);
//! assert!((rows[1][2] - 0.18).abs() < 1e-7);
//!
//! // 12-bit codes
//! assert_eq!(dcdm::oetf_int(0.18), 462);
//! ```

use dcdm_core::{get_scale, FloatSample, Sample, Scale, Signal};
use rayon::prelude::*;
use tracing::trace;

/// Luminance (cd/m2) that maps to a normalized code value of 1.0.
pub const L_NORM: f64 = 52.37;

/// Encoding exponent; the OETF uses its reciprocal.
pub const GAMMA: f64 = 2.6;

/// Bit depth of integer DCDM codes.
pub const BIT_DEPTH: u32 = 12;

/// Largest 12-bit code value.
pub const CODE_MAX: u16 = (1 << BIT_DEPTH) - 1;

/// Normalized XYZ to normalized code value, in the native domain.
#[inline]
pub fn encode(xyz: f64) -> f64 {
    (xyz / L_NORM).powf(1.0 / GAMMA)
}

/// Normalized code value to normalized XYZ, in the native domain.
#[inline]
pub fn decode(xyz_p: f64) -> f64 {
    L_NORM * xyz_p.powf(GAMMA)
}

/// Quantizes a normalized code value to a 12-bit code.
///
/// Rounds half to even and clips to `[0, 4095]`. NaN becomes 0.
///
/// ```rust
/// use dcdm_transfer::dcdm::quantize_12bit;
///
/// assert_eq!(quantize_12bit(0.5), 2048);
/// assert_eq!(quantize_12bit(2.0), 4095);
/// assert_eq!(quantize_12bit(f64::NAN), 0);
/// ```
#[inline]
pub fn quantize_12bit(xyz_p: f64) -> u16 {
    let max = CODE_MAX as f64;
    // `as` saturates and maps NaN to 0
    (xyz_p * max).round_ties_even().clamp(0.0, max) as u16
}

/// Normalizes a 12-bit code to `[0, 1]`.
///
/// Takes `f64` so codes held in any sample type can be passed; values
/// outside `[0, 4095]` are not clipped.
#[inline]
pub fn dequantize_12bit(code: f64) -> f64 {
    code / CODE_MAX as f64
}

/// DCDM encoder/decoder bound to an explicit domain-range scale.
///
/// The free functions in this module read the scale of the current scope;
/// `Dcdm` carries it by value instead, which is what parallel code needs.
///
/// ```rust
/// use dcdm_core::Scale;
/// use dcdm_transfer::dcdm::Dcdm;
///
/// let pct = Dcdm::new(Scale::Hundred);
/// assert!((pct.oetf(18.0) - 11.281861).abs() < 1e-6);
/// assert_eq!(pct.oetf_int(18.0), 462);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dcdm {
    /// Scale applied to float inputs and outputs.
    pub scale: Scale,
}

impl Dcdm {
    /// Creates a codec for `scale`.
    #[inline]
    pub const fn new(scale: Scale) -> Self {
        Self { scale }
    }

    /// Creates a codec for the scale active in the current scope.
    #[inline]
    pub fn current() -> Self {
        Self::new(get_scale())
    }

    /// Linear XYZ to code value.
    #[inline]
    pub fn oetf(self, xyz: f64) -> f64 {
        self.scale.from_range(encode(self.scale.to_domain(xyz)))
    }

    /// Linear XYZ to a 12-bit code.
    ///
    /// The input is read in the active scale; codes are absolute.
    #[inline]
    pub fn oetf_int(self, xyz: f64) -> u16 {
        quantize_12bit(encode(self.scale.to_domain(xyz)))
    }

    /// Code value to linear XYZ.
    #[inline]
    pub fn eotf(self, xyz_p: f64) -> f64 {
        self.scale.from_range(decode(self.scale.to_domain(xyz_p)))
    }

    /// 12-bit code to linear XYZ.
    ///
    /// Codes are absolute; only the output is expressed in the active scale.
    #[inline]
    pub fn eotf_int(self, code: u16) -> f64 {
        self.eotf_code(code as f64)
    }

    #[inline]
    fn eotf_code(self, code: f64) -> f64 {
        self.scale.from_range(decode(dequantize_12bit(code)))
    }

    /// [`Dcdm::oetf`] over a container, same shape as the input.
    pub fn oetf_signal<S: Signal>(self, xyz: S) -> S::Mapped<f64> {
        xyz.map_samples(|v| self.oetf(v))
    }

    /// [`Dcdm::oetf_int`] over a container, same shape as the input.
    pub fn oetf_int_signal<S: Signal>(self, xyz: S) -> S::Mapped<u16> {
        xyz.map_samples(|v| self.oetf_int(v))
    }

    /// [`Dcdm::eotf`] over a container, same shape as the input.
    pub fn eotf_signal<S: Signal>(self, xyz_p: S) -> S::Mapped<f64> {
        xyz_p.map_samples(|v| self.eotf(v))
    }

    /// [`Dcdm::eotf_int`] over a container of codes, same shape as the input.
    ///
    /// Codes held as floats are accepted and not clipped.
    pub fn eotf_int_signal<S: Signal>(self, codes: S) -> S::Mapped<f64> {
        codes.map_samples(|v| self.eotf_code(v))
    }

    /// Encodes a flat buffer in place.
    pub fn oetf_in_place<T: FloatSample + Send>(self, data: &mut [T]) {
        trace!(len = data.len(), scale = %self.scale, "dcdm::oetf_in_place");
        data.par_iter_mut()
            .for_each(|v| *v = T::from_f64(self.oetf(v.to_f64())));
    }

    /// Decodes a flat buffer in place.
    pub fn eotf_in_place<T: FloatSample + Send>(self, data: &mut [T]) {
        trace!(len = data.len(), scale = %self.scale, "dcdm::eotf_in_place");
        data.par_iter_mut()
            .for_each(|v| *v = T::from_f64(self.eotf(v.to_f64())));
    }

    /// Encodes a flat buffer to 12-bit codes.
    pub fn encode_codes<T: Sample + Sync>(self, data: &[T]) -> Vec<u16> {
        trace!(len = data.len(), scale = %self.scale, "dcdm::encode_codes");
        data.par_iter().map(|v| self.oetf_int(v.to_f64())).collect()
    }

    /// Decodes 12-bit codes to a flat linear buffer.
    pub fn decode_codes(self, codes: &[u16]) -> Vec<f64> {
        trace!(len = codes.len(), scale = %self.scale, "dcdm::decode_codes");
        codes.par_iter().map(|&c| self.eotf_int(c)).collect()
    }
}

/// DCDM OETF: linear XYZ to code value.
///
/// Reads the domain-range scale of the current scope.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::oetf;
///
/// assert_eq!(oetf(0.0), 0.0);
/// assert!((oetf(1.0) - 0.21817973).abs() < 1e-7);
/// ```
#[inline]
pub fn oetf(xyz: f64) -> f64 {
    Dcdm::current().oetf(xyz)
}

/// DCDM OETF with 12-bit integer output.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::oetf_int;
///
/// assert_eq!(oetf_int(0.18), 462);
/// ```
#[inline]
pub fn oetf_int(xyz: f64) -> u16 {
    Dcdm::current().oetf_int(xyz)
}

/// DCDM EOTF: code value to linear XYZ.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::eotf;
///
/// assert!((eotf(0.21817973) - 1.0).abs() < 1e-7);
/// ```
#[inline]
pub fn eotf(xyz_p: f64) -> f64 {
    Dcdm::current().eotf(xyz_p)
}

/// DCDM EOTF with 12-bit integer input.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::eotf_int;
///
/// assert!((eotf_int(462) - 0.18).abs() < 1e-5);
/// ```
#[inline]
pub fn eotf_int(code: u16) -> f64 {
    Dcdm::current().eotf_int(code)
}

/// DCDM OETF over a scalar or container, same shape out as in.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::{oetf, oetf_signal};
///
/// let rows: [[f64; 3]; 2] = oetf_signal([[0.18; 3]; 2]);
/// assert_eq!(rows, [[oetf(0.18); 3]; 2]);
/// ```
#[inline]
pub fn oetf_signal<S: Signal>(xyz: S) -> S::Mapped<f64> {
    Dcdm::current().oetf_signal(xyz)
}

/// DCDM OETF with 12-bit output over a scalar or container.
///
/// # Example
///
/// ```rust
/// use dcdm_transfer::dcdm::oetf_int_signal;
///
/// let codes: Vec<u16> = oetf_int_signal(vec![0.0, 0.18, 1.0]);
/// assert_eq!(codes, vec![0, 462, 893]);
/// ```
#[inline]
pub fn oetf_int_signal<S: Signal>(xyz: S) -> S::Mapped<u16> {
    Dcdm::current().oetf_int_signal(xyz)
}

/// DCDM EOTF over a scalar or container, same shape out as in.
#[inline]
pub fn eotf_signal<S: Signal>(xyz_p: S) -> S::Mapped<f64> {
    Dcdm::current().eotf_signal(xyz_p)
}

/// DCDM EOTF over a scalar or container of 12-bit codes.
#[inline]
pub fn eotf_int_signal<S: Signal>(codes: S) -> S::Mapped<f64> {
    Dcdm::current().eotf_int_signal(codes)
}

/// Applies the DCDM OETF to an XYZ triplet.
#[inline]
pub fn oetf_xyz(xyz: [f64; 3]) -> [f64; 3] {
    xyz.map(oetf)
}

/// Applies the DCDM EOTF to an X'Y'Z' triplet.
#[inline]
pub fn eotf_xyz(xyz_p: [f64; 3]) -> [f64; 3] {
    xyz_p.map(eotf)
}
