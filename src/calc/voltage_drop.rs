//! Voltage drop in volts and percent, by the impedance method and by the
//! DS empirical-constant formula.

use crate::types::{Impedance, Material, Phase};

/// A computed voltage drop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VoltageDrop {
    pub volts: f64,
    pub percent: f64,
}

/// Voltage drop over a cable from its per-km impedance.
///
/// ΔU = I·L·(R·cosφ + X·sinφ), times √3 for three-phase or ×2 for the
/// single-phase go-and-return loop. `length_km` is in kilometres to match
/// the Ω/km impedance.
pub fn voltage_drop(
    current: f64,
    length_km: f64,
    z_per_km: Impedance,
    cos_phi: f64,
    phase: Phase,
    nominal_voltage: f64,
) -> VoltageDrop {
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    let drop_per_conductor = current * length_km * (z_per_km.r * cos_phi + z_per_km.x * sin_phi);
    let volts = match phase {
        Phase::Three => 3f64.sqrt() * drop_per_conductor,
        Phase::Single => 2.0 * drop_per_conductor,
    };
    VoltageDrop {
        volts,
        percent: volts / nominal_voltage * 100.0,
    }
}

/// Voltage drop by the DS formula with per-material constants q and λ:
/// ΔU = b·(q·L/S·cosφ + λ·L·sinφ)·I, with b = 1 for three-phase and
/// b = 2 for single-phase. `length_m` is in metres.
pub fn voltage_drop_ds(
    nominal_voltage: f64,
    current: f64,
    material: Material,
    cross_section: f64,
    length_m: f64,
    phase: Phase,
    cos_phi: f64,
) -> VoltageDrop {
    let b = match phase {
        Phase::Three => 1.0,
        Phase::Single => 2.0,
    };
    let q = material.ds_q();
    let lambda = material.ds_lambda();
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();

    let volts =
        b * (q * (length_m / cross_section) * cos_phi + lambda * length_m * sin_phi) * current;
    VoltageDrop {
        volts,
        percent: volts / nominal_voltage * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phase_doubles_the_conductor_drop() {
        let z = Impedance::new(1.83, 0.0);
        let single = voltage_drop(10.0, 0.05, z, 1.0, Phase::Single, 230.0);
        assert!((single.volts - 2.0 * 10.0 * 0.05 * 1.83).abs() < 1e-12);
    }

    #[test]
    fn three_phase_scales_by_sqrt3() {
        let z = Impedance::new(1.83, 0.0);
        let three = voltage_drop(10.0, 0.05, z, 1.0, Phase::Three, 400.0);
        assert!((three.volts - 3f64.sqrt() * 10.0 * 0.05 * 1.83).abs() < 1e-12);
    }

    #[test]
    fn reactance_contributes_only_below_unity_power_factor() {
        let z = Impedance::new(1.0, 1.0);
        let unity = voltage_drop(10.0, 0.1, z, 1.0, Phase::Single, 230.0);
        let lagging = voltage_drop(10.0, 0.1, z, 0.8, Phase::Single, 230.0);
        assert!((unity.volts - 2.0).abs() < 1e-12);
        // 0.8·R + 0.6·X = 1.4 per ohm-km of each.
        assert!((lagging.volts - 2.0 * 10.0 * 0.1 * 1.4).abs() < 1e-12);
    }

    #[test]
    fn ds_formula_at_unity_power_factor() {
        // ΔU = 2 · 0.0225 · (20/6) · 32 = 4.8 V on 230 V.
        let du = voltage_drop_ds(230.0, 32.0, Material::Cu, 6.0, 20.0, Phase::Single, 1.0);
        assert!((du.volts - 4.8).abs() < 1e-12);
        assert!((du.percent - 4.8 / 230.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn ds_three_phase_has_unit_factor() {
        let single = voltage_drop_ds(230.0, 32.0, Material::Cu, 6.0, 20.0, Phase::Single, 1.0);
        let three = voltage_drop_ds(400.0, 32.0, Material::Cu, 6.0, 20.0, Phase::Three, 1.0);
        assert!((single.volts - 2.0 * three.volts).abs() < 1e-12);
    }
}
