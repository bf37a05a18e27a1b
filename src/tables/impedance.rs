//! Per-kilometre conductor resistance and reactance, NKT NOIK/NOIKLX
//! catalog values at 50 Hz and 20 °C. Transcribed data — do not edit by
//! hand.

use crate::types::{Impedance, Material, Phase};

/// Reactance fallback in Ω/km when a size has no catalog row.
const X_FALLBACK: f64 = 0.08;

const NKT_R_CU: &[(f64, f64)] = &[
    (1.5, 12.10),
    (2.5, 7.410),
    (4.0, 4.610),
    (6.0, 3.080),
    (10.0, 1.830),
    (16.0, 1.150),
    (25.0, 0.727),
    (35.0, 0.525),
    (50.0, 0.388),
    (70.0, 0.269),
    (95.0, 0.194),
    (120.0, 0.155),
    (150.0, 0.126),
    (185.0, 0.1017),
    (240.0, 0.0787),
    (300.0, 0.103),
];

const NKT_R_AL: &[(f64, f64)] = &[
    (16.0, 1.910),
    (25.0, 1.200),
    (35.0, 0.868),
    (50.0, 0.641),
    (70.0, 0.444),
    (95.0, 0.321),
    (120.0, 0.254),
    (150.0, 0.207),
    (185.0, 0.166),
    (240.0, 0.127),
    (300.0, 0.103),
];

const NKT_X_CU_3CORE: &[(f64, f64)] = &[
    (1.5, 0.103),
    (2.5, 0.095),
    (4.0, 0.089),
    (6.0, 0.087),
    (10.0, 0.082),
    (16.0, 0.078),
    (25.0, 0.074),
    (35.0, 0.073),
    (50.0, 0.070),
    (70.0, 0.067),
    (95.0, 0.065),
    (120.0, 0.064),
    (150.0, 0.063),
    (185.0, 0.062),
    (240.0, 0.061),
    (300.0, 0.060),
];

const NKT_X_CU_4CORE: &[(f64, f64)] = &[
    (1.5, 0.110),
    (2.5, 0.102),
    (4.0, 0.096),
    (6.0, 0.094),
    (10.0, 0.089),
    (16.0, 0.085),
    (25.0, 0.086),
    (35.0, 0.082),
    (50.0, 0.084),
    (70.0, 0.081),
    (95.0, 0.082),
    (120.0, 0.082),
    (150.0, 0.084),
    (185.0, 0.082),
    (240.0, 0.083),
    (300.0, 0.083),
];

const NKT_X_AL_4CORE: &[(f64, f64)] = &[
    (16.0, 0.089),
    (25.0, 0.086),
    (35.0, 0.082),
    (50.0, 0.084),
    (70.0, 0.081),
    (95.0, 0.082),
    (120.0, 0.082),
    (150.0, 0.084),
    (185.0, 0.082),
    (240.0, 0.083),
    (300.0, 0.083),
];

fn table_value(table: &[(f64, f64)], cross_section: f64) -> Option<f64> {
    table
        .iter()
        .find(|&&(s, _)| s == cross_section)
        .map(|&(_, v)| v)
}

/// Conductor impedance in Ω/km for one cable.
///
/// Resistance comes from the catalog (20 °C), adjusted to the requested
/// conductor temperature via the material's temperature coefficient.
/// Reactance picks the 3-core column for three-phase copper and the 4-core
/// column otherwise. Sizes absent from the catalog fall back to the
/// analytic ρ·1000/S resistance and a flat 0.08 Ω/km reactance.
pub fn cable_impedance_per_km(
    cross_section: f64,
    material: Material,
    phase: Phase,
    conductor_temp_c: f64,
) -> Impedance {
    let r_table = match material {
        Material::Cu => NKT_R_CU,
        Material::Al => NKT_R_AL,
    };

    let temp_scale = 1.0 + material.temp_coefficient() * (conductor_temp_c - 20.0);

    let Some(r20) = table_value(r_table, cross_section) else {
        let r = material.resistivity_20c() * 1000.0 / cross_section;
        return Impedance::new(r * temp_scale, X_FALLBACK);
    };

    let x_table = match (material, phase) {
        (Material::Cu, Phase::Three) => NKT_X_CU_3CORE,
        (Material::Cu, Phase::Single) => NKT_X_CU_4CORE,
        (Material::Al, _) => NKT_X_AL_4CORE,
    };
    let x = table_value(x_table, cross_section).unwrap_or(X_FALLBACK);

    Impedance::new(r20 * temp_scale, x)
}

/// Resistance in Ω/km of a protective earth conductor at 20 °C.
///
/// Earth conductors are sized from the same catalog rows; off-catalog
/// sizes use the analytic fallback. Returns 0.0 for a non-positive
/// cross-section so callers can treat "no conductor" as open data.
pub fn earth_conductor_resistance_per_km(cross_section: f64, material: Material) -> f64 {
    if cross_section <= 0.0 {
        return 0.0;
    }
    let r_table = match material {
        Material::Cu => NKT_R_CU,
        Material::Al => NKT_R_AL,
    };
    table_value(r_table, cross_section)
        .unwrap_or_else(|| material.resistivity_20c() * 1000.0 / cross_section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_values_at_20c() {
        let z = cable_impedance_per_km(16.0, Material::Cu, Phase::Three, 20.0);
        assert_eq!(z.r, 1.150);
        assert_eq!(z.x, 0.078);

        let z = cable_impedance_per_km(16.0, Material::Cu, Phase::Single, 20.0);
        assert_eq!(z.x, 0.085);

        let z = cable_impedance_per_km(50.0, Material::Al, Phase::Three, 20.0);
        assert_eq!(z.r, 0.641);
        assert_eq!(z.x, 0.084);
    }

    #[test]
    fn off_catalog_size_uses_analytic_fallback() {
        let z = cable_impedance_per_km(400.0, Material::Cu, Phase::Three, 20.0);
        assert!((z.r - 0.0175 * 1000.0 / 400.0).abs() < 1e-12);
        assert_eq!(z.x, 0.08);
    }

    #[test]
    fn aluminium_below_16_uses_analytic_fallback() {
        let z = cable_impedance_per_km(10.0, Material::Al, Phase::Three, 20.0);
        assert!((z.r - 0.0283 * 1000.0 / 10.0).abs() < 1e-12);
    }

    #[test]
    fn resistance_rises_with_conductor_temperature() {
        let cold = cable_impedance_per_km(16.0, Material::Cu, Phase::Three, 20.0);
        let hot = cable_impedance_per_km(16.0, Material::Cu, Phase::Three, 90.0);
        assert!((hot.r / cold.r - (1.0 + 0.00393 * 70.0)).abs() < 1e-12);
        // Reactance is geometry, not temperature.
        assert_eq!(hot.x, cold.x);
    }

    #[test]
    fn earth_resistance_matches_catalog() {
        assert_eq!(earth_conductor_resistance_per_km(16.0, Material::Cu), 1.150);
        assert_eq!(earth_conductor_resistance_per_km(0.0, Material::Cu), 0.0);
        let r = earth_conductor_resistance_per_km(7.0, Material::Cu);
        assert!((r - 2.5).abs() < 1e-12);
    }
}
