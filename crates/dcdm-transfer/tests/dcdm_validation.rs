//! DCDM transfer function validation tests.
//!
//! Validates the DCDM OETF/EOTF against SMPTE 428-1 reference values,
//! container shape handling, domain-range scale support and NaN handling.
//!
//! # Reference Documents
//!
//! - SMPTE 428-1:2006 D-Cinema Distribution Master - Image Characteristics

use approx::assert_abs_diff_eq;
use dcdm_core::{get_scale, set_scale, with_scale, Scale};
use dcdm_transfer::dcdm::{self, Dcdm};

// ============================================================================
// Reference Values
// ============================================================================
// DCDM formula:
//   XYZ' = (XYZ / 52.37)^(1/2.6)
//   code = round(4095 * XYZ')

/// (linear XYZ, DCDM code value)
const DCDM_REFERENCE: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.18, 0.11281861),
    (1.0, 0.21817973),
];

/// Decimal places the reference values are published with.
const PLACES_7: f64 = 5e-8;

// ============================================================================
// OETF Validation Tests
// ============================================================================

#[test]
fn test_oetf_reference_values() {
    for &(linear, expected) in DCDM_REFERENCE {
        let encoded = dcdm::oetf(linear);
        assert!(
            (encoded - expected).abs() < PLACES_7,
            "DCDM OETF({}) = {} (expected {}, diff={})",
            linear,
            encoded,
            expected,
            (encoded - expected).abs()
        );
    }
    assert_eq!(dcdm::oetf(0.0), 0.0);
}

#[test]
fn test_oetf_int() {
    assert_eq!(dcdm::oetf_int(0.18), 462);
    assert_eq!(dcdm::oetf_int(0.0), 0);
    assert_eq!(dcdm::oetf_int(dcdm::L_NORM), dcdm::CODE_MAX);
}

#[test]
fn test_plain_literals() {
    // Calls written the way a user types them, no suffixes or annotations
    assert_eq!(dcdm::oetf_int(0.18), 462);
    assert_eq!(dcdm::oetf_int(1.0), 893);
    assert!(dcdm::oetf(0.18).abs() > 0.0);
    assert!((dcdm::oetf(0.18) - 0.11281861).abs() < PLACES_7);
    assert!((dcdm::eotf(0.11281861) - 0.18).abs() < PLACES_7);
    assert!((dcdm::eotf_int(462) - 0.18).abs() < 1e-5);

    assert_eq!(dcdm::oetf_int_signal([0.0, 0.18, 1.0]), [0, 462, 893]);
    assert_eq!(dcdm::oetf_int_signal(vec![[0.18; 3]; 2]), vec![[462; 3]; 2]);
    let linear: [f64; 2] = dcdm::eotf_int_signal([0, 462]);
    assert_eq!(linear[0], 0.0);
    assert!((linear[1] - 0.18).abs() < 1e-5);

    let pct = Dcdm::new(Scale::Hundred);
    assert_eq!(pct.oetf_int(18.0), 462);
    assert!((pct.eotf_int(462) - 18.0).abs() < 1e-3);
}

#[test]
fn test_oetf_n_dimensional() {
    let xyz = 0.18;
    let xyz_p = 0.11281861;
    assert_abs_diff_eq!(dcdm::oetf(xyz), xyz_p, epsilon = PLACES_7);

    let flat = dcdm::oetf_signal([xyz; 6]);
    for v in flat {
        assert_abs_diff_eq!(v, xyz_p, epsilon = PLACES_7);
    }

    let grid: [[f64; 3]; 2] = dcdm::oetf_signal([[xyz; 3]; 2]);
    for row in grid {
        for v in row {
            assert_abs_diff_eq!(v, xyz_p, epsilon = PLACES_7);
        }
    }

    let cube: [[[f64; 1]; 3]; 2] = dcdm::oetf_signal([[[xyz; 1]; 3]; 2]);
    for row in cube {
        for col in row {
            assert_abs_diff_eq!(col[0], xyz_p, epsilon = PLACES_7);
        }
    }

    // Every element of every reshape is the scalar result
    let scalar = dcdm::oetf(xyz);
    assert_eq!(flat, [scalar; 6]);
    assert_eq!(grid, [[scalar; 3]; 2]);
    assert_eq!(cube, [[[scalar; 1]; 3]; 2]);

    let nested = dcdm::oetf_signal(vec![vec![xyz; 3]; 2]);
    assert_eq!(nested, vec![vec![scalar; 3]; 2]);

    let codes = dcdm::oetf_int_signal([[xyz; 3]; 2]);
    assert_eq!(codes, [[462; 3]; 2]);
}

#[test]
fn test_oetf_domain_range_scale() {
    let xyz = 0.18;
    let xyz_p = dcdm::oetf(xyz);

    let d_r = [(Scale::Reference, 1.0), (Scale::One, 1.0), (Scale::Hundred, 100.0)];
    for (scale, factor) in d_r {
        let _guard = set_scale(scale);
        assert_abs_diff_eq!(dcdm::oetf(xyz * factor), xyz_p * factor, epsilon = 1e-7);
    }
    assert_eq!(get_scale(), Scale::Reference);
}

#[test]
fn test_oetf_nan() {
    let cases = [-1.0, 0.0, 1.0, f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
    let out = dcdm::oetf_signal(cases);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 0.0);
    assert!(out[2].is_finite());
    // pow(-inf, y) is +inf for non-integer y > 0
    assert_eq!(out[3], f64::INFINITY);
    assert_eq!(out[4], f64::INFINITY);
    assert!(out[5].is_nan());

    // Integer output stays inside the 12-bit range
    let codes = dcdm::oetf_int_signal(cases);
    assert_eq!(codes, [0, 0, 893, 4095, 4095, 0]);
}

// ============================================================================
// EOTF Validation Tests
// ============================================================================

#[test]
fn test_eotf_reference_values() {
    for &(expected, code) in DCDM_REFERENCE {
        let decoded = dcdm::eotf(code);
        assert!(
            (decoded - expected).abs() < PLACES_7,
            "DCDM EOTF({}) = {} (expected {}, diff={})",
            code,
            decoded,
            expected,
            (decoded - expected).abs()
        );
    }
    assert_eq!(dcdm::eotf(0.0), 0.0);
}

#[test]
fn test_eotf_int() {
    let decoded = dcdm::eotf_int(462);
    // atol + rtol * expected
    assert!(
        (decoded - 0.18).abs() <= 1e-5 + 1e-5 * 0.18,
        "DCDM EOTF(462 int) = {}",
        decoded
    );
    assert_eq!(dcdm::eotf_int(0), 0.0);
    assert_abs_diff_eq!(dcdm::eotf_int(4095), dcdm::L_NORM, epsilon = 1e-12);
    // Codes may arrive as floats too
    assert_eq!(dcdm::eotf_int_signal(462.0), decoded);
}

#[test]
fn test_eotf_n_dimensional() {
    let xyz_p = 0.11281861;
    let xyz = 0.18;
    assert_abs_diff_eq!(dcdm::eotf(xyz_p), xyz, epsilon = PLACES_7);

    let scalar = dcdm::eotf(xyz_p);
    assert_eq!(dcdm::eotf_signal([xyz_p; 6]), [scalar; 6]);
    assert_eq!(dcdm::eotf_signal([[xyz_p; 3]; 2]), [[scalar; 3]; 2]);
    assert_eq!(dcdm::eotf_signal([[[xyz_p; 1]; 3]; 2]), [[[scalar; 1]; 3]; 2]);
    assert_eq!(dcdm::eotf_signal(vec![xyz_p; 6]), vec![scalar; 6]);

    let data = [xyz_p; 4];
    let from_slice = dcdm::eotf_signal(&data[..]);
    assert_eq!(from_slice, vec![scalar; 4]);
    assert_abs_diff_eq!(from_slice[3], xyz, epsilon = PLACES_7);
}

#[test]
fn test_eotf_domain_range_scale() {
    let xyz_p = 0.11281861;
    let xyz = dcdm::eotf(xyz_p);

    let d_r = [(Scale::Reference, 1.0), (Scale::One, 1.0), (Scale::Hundred, 100.0)];
    for (scale, factor) in d_r {
        with_scale(scale, || {
            assert_abs_diff_eq!(dcdm::eotf(xyz_p * factor), xyz * factor, epsilon = 1e-7);
        });
    }
    assert_eq!(get_scale(), Scale::Reference);
}

#[test]
fn test_eotf_nan() {
    let cases = [-1.0, 0.0, 1.0, f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
    let out = dcdm::eotf_signal(cases);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 0.0);
    assert_eq!(out[2], dcdm::L_NORM);
    assert_eq!(out[3], f64::INFINITY);
    assert_eq!(out[4], f64::INFINITY);
    assert!(out[5].is_nan());

    let from_codes = dcdm::eotf_int_signal(cases);
    assert!(from_codes[0].is_nan());
    assert!(from_codes[5].is_nan());
}

// ============================================================================
// Cross-validation Tests
// ============================================================================

#[test]
fn test_roundtrip_precision() {
    for i in 0..=200 {
        let linear = i as f64 / 200.0;
        let encoded = dcdm::oetf(linear);
        let decoded = dcdm::eotf(encoded);
        assert!(
            (linear - decoded).abs() < 1e-6,
            "DCDM roundtrip: {} -> {} -> {} (diff={})",
            linear,
            encoded,
            decoded,
            (linear - decoded).abs()
        );
    }
}

#[test]
fn test_roundtrip_in_percent() {
    let codec = Dcdm::new(Scale::Hundred);
    for i in 0..=100 {
        let pct = i as f64;
        assert_abs_diff_eq!(codec.eotf(codec.oetf(pct)), pct, epsilon = 1e-9);
    }
}

#[test]
fn test_oetf_monotonic() {
    let mut prev = dcdm::oetf(0.0);
    for i in 1..1000 {
        let linear = i as f64 / 100.0;
        let encoded = dcdm::oetf(linear);
        assert!(
            encoded > prev,
            "DCDM OETF not monotonic at {}: {} <= {}",
            linear,
            encoded,
            prev
        );
        prev = encoded;
    }
}

#[test]
fn test_parallel_buffer_matches_scalar() {
    let src: Vec<f64> = (0..4096).map(|i| i as f64 / 4095.0).collect();
    let codec = Dcdm::new(Scale::One);

    let mut buf = src.clone();
    codec.oetf_in_place(&mut buf);
    for (got, &x) in buf.iter().zip(&src) {
        assert_eq!(*got, dcdm::oetf(x));
    }

    let codes = codec.encode_codes(&src);
    assert_eq!(codes, dcdm::oetf_int_signal(src.clone()));
    assert_eq!(codec.decode_codes(&codes), dcdm::eotf_int_signal(codes.clone()));
}

#[test]
fn test_scale_flows_to_parallel_workers() {
    let _guard = set_scale(Scale::Hundred);
    let codec = Dcdm::current();
    let mut buf = vec![18.0f64; 1024];
    codec.oetf_in_place(&mut buf);
    for v in buf {
        assert_abs_diff_eq!(v, 11.281861, epsilon = 1e-6);
    }
}
