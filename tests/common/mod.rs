//! Shared test fixtures for integration tests.

use elcalc::calc::selector::Segment;
use elcalc::types::Insulation;

/// A single undecorated selector segment: method C, XLPE, no derating.
pub fn plain_segment(length_m: f64, loaded_conductors: u32) -> Segment {
    Segment {
        ref_method: "C".to_string(),
        length_m,
        loaded_conductors,
        kt: 1.0,
        kgrp: 1.0,
        insulation: Insulation::Xlpe,
    }
}

/// Asserts two floats agree to within `eps`.
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}
