//! Earth-fault loop calculations and protective-conductor sizing rules.

use crate::types::Material;

/// Earth fault loop impedance Zs = Zs,source + R_phase + R_earth.
pub fn loop_impedance(source_zs: f64, phase_resistance: f64, earth_resistance: f64) -> f64 {
    source_zs + phase_resistance + earth_resistance
}

/// Earth fault current Ia = U₀/Zs. Non-positive Zs yields 0.
pub fn fault_current(phase_voltage: f64, zs: f64) -> f64 {
    if zs <= 0.0 {
        return 0.0;
    }
    phase_voltage / zs
}

/// Prospective touch voltage over the earth conductor: Ut = Ia · R_earth.
pub fn touch_voltage(fault_current: f64, earth_resistance: f64) -> f64 {
    fault_current * earth_resistance
}

/// Largest loop impedance that still drives the disconnection current the
/// protective device needs. Zero required current yields 0.
pub fn max_loop_impedance(phase_voltage: f64, required_current: f64) -> f64 {
    if required_current <= 0.0 {
        return 0.0;
    }
    phase_voltage / required_current
}

/// Minimum main earth conductor size in mm² (DS/HD 60364 §542.3.1).
pub fn minimum_main_earth_conductor(material: Material, mechanically_protected: bool) -> f64 {
    match (material, mechanically_protected) {
        (Material::Cu, true) => 6.0,
        (Material::Cu, false) => 16.0,
        (Material::Al, true) => 16.0,
        (Material::Al, false) => 25.0,
    }
}

/// Cable construction, deciding whether the protective conductor can be
/// reduced below the phase size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CableConstruction {
    /// Integrated PE; always the phase conductor size.
    MultiCore,
    SingleCore,
    Armored,
}

/// Minimum protective earth conductor size for a phase conductor size,
/// per Table 54.2: PE = S up to 16 mm², 16 mm² up to S = 35 mm², S/2
/// above. Multi-core cables carry the PE at phase size regardless.
pub fn minimum_earth_conductor_size(
    phase_conductor_size: f64,
    construction: CableConstruction,
) -> f64 {
    if construction == CableConstruction::MultiCore {
        return phase_conductor_size;
    }
    if phase_conductor_size <= 16.0 {
        phase_conductor_size
    } else if phase_conductor_size <= 35.0 {
        16.0
    } else {
        phase_conductor_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_impedance_is_a_plain_sum() {
        assert_eq!(loop_impedance(0.3, 0.1, 0.15), 0.55);
    }

    #[test]
    fn fault_current_with_zero_sentinel() {
        assert_eq!(fault_current(230.0, 0.46), 500.0);
        assert_eq!(fault_current(230.0, 0.0), 0.0);
        assert_eq!(fault_current(230.0, -1.0), 0.0);
    }

    #[test]
    fn max_loop_impedance_for_a_b16_breaker() {
        // 16 A type B needs 5×In = 80 A.
        assert!((max_loop_impedance(230.0, 80.0) - 2.875).abs() < 1e-12);
        assert_eq!(max_loop_impedance(230.0, 0.0), 0.0);
    }

    #[test]
    fn touch_voltage_scales_with_earth_leg() {
        assert_eq!(touch_voltage(100.0, 0.2), 20.0);
    }

    #[test]
    fn table_54_2_earth_sizing() {
        assert_eq!(
            minimum_earth_conductor_size(10.0, CableConstruction::SingleCore),
            10.0
        );
        assert_eq!(
            minimum_earth_conductor_size(25.0, CableConstruction::SingleCore),
            16.0
        );
        assert_eq!(
            minimum_earth_conductor_size(95.0, CableConstruction::Armored),
            47.5
        );
        // Integrated PE never reduces.
        assert_eq!(
            minimum_earth_conductor_size(25.0, CableConstruction::MultiCore),
            25.0
        );
    }

    #[test]
    fn main_earth_minimums() {
        assert_eq!(minimum_main_earth_conductor(Material::Cu, true), 6.0);
        assert_eq!(minimum_main_earth_conductor(Material::Cu, false), 16.0);
        assert_eq!(minimum_main_earth_conductor(Material::Al, true), 16.0);
        assert_eq!(minimum_main_earth_conductor(Material::Al, false), 25.0);
    }
}
