//! Ampacity correction factors: ambient temperature (Kt) and grouping
//! (Kgrp).

use crate::tables::ampacity::KNOWN_METHODS;
use crate::types::Environment;

/// Temperature correction for cables in air, referenced to 30 °C.
pub const KTEMP_AIR: &[(f64, f64)] = &[
    (10.0, 1.15),
    (15.0, 1.12),
    (20.0, 1.08),
    (25.0, 1.04),
    (30.0, 1.00),
    (35.0, 0.96),
    (40.0, 0.91),
    (45.0, 0.87),
    (50.0, 0.82),
    (55.0, 0.76),
    (60.0, 0.71),
    (65.0, 0.65),
    (70.0, 0.58),
    (75.0, 0.50),
    (80.0, 0.41),
];

/// Temperature correction for buried cables, referenced to 20 °C.
pub const KTEMP_GROUND: &[(f64, f64)] = &[
    (10.0, 1.07),
    (15.0, 1.04),
    (20.0, 1.00),
    (25.0, 0.96),
    (30.0, 0.93),
    (35.0, 0.89),
    (40.0, 0.85),
    (45.0, 0.80),
    (50.0, 0.76),
    (55.0, 0.71),
    (60.0, 0.65),
    (65.0, 0.60),
    (70.0, 0.53),
    (75.0, 0.46),
    (80.0, 0.38),
];

/// Grouping factors by number of grouped circuits. The same row applies to
/// all reference methods A1–D2.
pub const KGRP_ROW: &[(u32, f64)] = &[
    (1, 1.00),
    (2, 0.80),
    (3, 0.70),
    (4, 0.65),
    (5, 0.60),
    (6, 0.57),
    (7, 0.54),
    (8, 0.52),
    (9, 0.50),
    (12, 0.45),
    (16, 0.41),
    (20, 0.38),
];

/// Temperature correction factor Kt for a given ambient temperature.
///
/// Linear interpolation between table rows; clamps to the end rows outside
/// the tabulated 10–80 °C range.
pub fn temperature_factor(ambient_temp_c: f64, environment: Environment) -> f64 {
    let table = match environment {
        Environment::Air => KTEMP_AIR,
        Environment::Ground => KTEMP_GROUND,
    };

    let (first_t, first_k) = table[0];
    let (last_t, last_k) = table[table.len() - 1];
    if ambient_temp_c <= first_t {
        return first_k;
    }
    if ambient_temp_c >= last_t {
        return last_k;
    }

    for pair in table.windows(2) {
        let (t1, k1) = pair[0];
        let (t2, k2) = pair[1];
        if ambient_temp_c >= t1 && ambient_temp_c <= t2 {
            let ratio = (ambient_temp_c - t1) / (t2 - t1);
            return k1 + ratio * (k2 - k1);
        }
    }

    1.0
}

/// Grouping factor Kgrp for `cables_grouped` circuits installed together.
///
/// A single circuit or an unknown reference method needs no derating.
/// Buried cables (methods D1/D2) laid with more than 0.5 m between them
/// are exempt per DS/HD 60364 guidance. Between table rows the nearest
/// lower row applies, so the factor is a step function of the count.
pub fn grouping_factor(cables_grouped: u32, ref_method: &str, spacing_m: Option<f64>) -> f64 {
    if cables_grouped <= 1 || !KNOWN_METHODS.contains(&ref_method) {
        return 1.0;
    }

    if let Some(spacing) = spacing_m {
        if spacing > 0.5 && (ref_method.starts_with("D1") || ref_method.starts_with("D2")) {
            return 1.0;
        }
    }

    KGRP_ROW
        .iter()
        .rev()
        .find(|&&(n, _)| n <= cables_grouped)
        .map_or(1.0, |&(_, k)| k)
}
