//! Short-circuit currents, source impedances, and the thermal withstand
//! check.
//!
//! Everything here is a pure function of its numeric inputs. Degenerate
//! inputs (zero divisors, non-physical factors) return 0-valued results
//! instead of erroring, since the outputs feed directly into reports.

use crate::types::{Impedance, Phase};

/// A fault current phasor: magnitude in amperes, angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaultCurrent {
    pub magnitude: f64,
    pub angle_deg: f64,
}

impl FaultCurrent {
    /// I = U / Z by explicit complex division: I = U·conj(Z)/|Z|².
    /// Zero total impedance yields the zero phasor.
    pub fn from_voltage_and_impedance(voltage: f64, z: Impedance) -> FaultCurrent {
        let denom = z.r * z.r + z.x * z.x;
        if denom == 0.0 {
            return FaultCurrent::default();
        }
        let i_re = voltage * z.r / denom;
        let i_im = -voltage * z.x / denom;
        FaultCurrent {
            magnitude: (i_re * i_re + i_im * i_im).sqrt(),
            angle_deg: i_im.atan2(i_re).to_degrees(),
        }
    }
}

/// Fault current at the far end of a cable fed from a known source
/// impedance. Three-phase faults are driven by the phase voltage U/√3.
pub fn fault_current(
    source_voltage: f64,
    source: Impedance,
    cable: Impedance,
    phase: Phase,
) -> FaultCurrent {
    let voltage = match phase {
        Phase::Three => source_voltage / 3f64.sqrt(),
        Phase::Single => source_voltage,
    };
    FaultCurrent::from_voltage_and_impedance(voltage, source.series(cable))
}

/// Minimum fault current at the service cable tap.
///
/// The supply is reduced to a real-only equivalent impedance Z = U/Imin;
/// the cable impedance is doubled to model the go-and-return loop.
pub fn ik_min_service(
    phase_voltage: f64,
    imin_supply: f64,
    service_cable: Impedance,
) -> FaultCurrent {
    ik_min_group(phase_voltage, imin_supply, service_cable, Impedance::default())
}

/// Minimum fault current at a group tap behind the service cable.
pub fn ik_min_group(
    phase_voltage: f64,
    imin_supply: f64,
    service_cable: Impedance,
    group_cable: Impedance,
) -> FaultCurrent {
    if imin_supply == 0.0 {
        return FaultCurrent::default();
    }
    let z_supply = phase_voltage / imin_supply;
    let path = service_cable.series(group_cable);
    let z_total = Impedance::new(z_supply + 2.0 * path.r, 2.0 * path.x);
    FaultCurrent::from_voltage_and_impedance(phase_voltage, z_total)
}

/// Maximum fault current at the service tap, referred to the transformer's
/// rated fault current and power factor. Also returns |Z_total| for
/// breaking-capacity checks.
pub fn ik_max_service(
    phase_voltage: f64,
    ik_trafo: f64,
    cos_trafo: f64,
    service_cable: Impedance,
) -> (FaultCurrent, f64) {
    if ik_trafo == 0.0 {
        return (FaultCurrent::default(), 0.0);
    }
    let sin_trafo = (1.0 - cos_trafo * cos_trafo).max(0.0).sqrt();
    let z_trafo = Impedance::new(
        phase_voltage / ik_trafo * cos_trafo,
        -(phase_voltage / ik_trafo) * sin_trafo,
    );
    let z_total = z_trafo.series(service_cable);
    let current = FaultCurrent::from_voltage_and_impedance(phase_voltage, z_total);
    (current, z_total.magnitude())
}

/// Outcome of the k²S² vs I²t comparison. Both energies are kept for
/// display, not just the verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalCheck {
    pub ok: bool,
    /// Cable withstand k²S² in A²s.
    pub cable_energy: f64,
    /// Let-through I²t in A²s.
    pub let_through: f64,
}

/// Thermal withstand check: the cable survives when k²S² strictly exceeds
/// I²t.
pub fn thermal_check(k: f64, cross_section: f64, ik: f64, trip_time_s: f64) -> ThermalCheck {
    let cable_energy = k * k * cross_section * cross_section;
    let let_through = ik * ik * trip_time_s;
    ThermalCheck {
        ok: cable_energy > let_through,
        cable_energy,
        let_through,
    }
}

/// Smallest reduced-neutral cross-section that survives the fault:
/// S = √(I²t) / k. Non-positive inputs yield 0.
pub fn reduced_neutral_size(ik: f64, trip_time_s: f64, k: f64) -> f64 {
    if ik <= 0.0 || trip_time_s <= 0.0 || k <= 0.0 {
        return 0.0;
    }
    (ik * ik * trip_time_s).sqrt() / k
}

/// Transformer equivalent impedance from nameplate data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformerImpedance {
    pub z: Impedance,
    pub magnitude: f64,
    pub cos_phi: f64,
    pub sin_phi: f64,
}

/// Z = Ek%·U²/(100·S); cosφ = P_cu·U²/(S²·Z), clamped to [0, 1].
pub fn transformer_impedance(
    s_va: f64,
    u_v: f64,
    ek_percent: f64,
    p_cu_w: f64,
) -> TransformerImpedance {
    let magnitude = ek_percent * u_v * u_v / (100.0 * s_va);
    let cos_phi = (p_cu_w * u_v * u_v / (s_va * s_va * magnitude)).clamp(0.0, 1.0);
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    TransformerImpedance {
        z: Impedance::new(magnitude * cos_phi, magnitude * sin_phi),
        magnitude,
        cos_phi,
        sin_phi,
    }
}

/// Upstream network impedance Z = U²/Sk,max with the angle set by the
/// network's R/X ratio. Zero fault power yields the zero impedance.
pub fn network_impedance(u_v: f64, sk_max_va: f64, r_x_ratio: f64) -> Impedance {
    if sk_max_va <= 0.0 {
        return Impedance::default();
    }
    let magnitude = u_v * u_v / sk_max_va;
    let angle = (1.0 / r_x_ratio).atan();
    Impedance::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// Phasor sum of load currents with individual power factors. Returns the
/// total magnitude and the resulting power factor (1.0 for the empty sum).
pub fn add_load_currents(loads: &[(f64, f64)]) -> (f64, f64) {
    let mut real_sum = 0.0;
    let mut imag_sum = 0.0;
    for &(magnitude, cos_phi) in loads {
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        real_sum += magnitude * cos_phi;
        imag_sum += magnitude * sin_phi;
    }
    let total = (real_sum * real_sum + imag_sum * imag_sum).sqrt();
    let cos_phi = if total > 0.0 { real_sum / total } else { 1.0 };
    (total, cos_phi)
}

/// Current split between two parallel cables of possibly unequal
/// impedance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelSplit {
    pub current_1: f64,
    pub current_2: f64,
    /// How far the split deviates from 50 %, in percentage points.
    pub imbalance_percent: f64,
    /// Set when the imbalance exceeds 10 percentage points.
    pub imbalanced: bool,
}

/// Divides `total_current` inversely to the cable impedances. Non-positive
/// impedances fall back to an even split.
pub fn parallel_cable_currents(total_current: f64, z1: f64, z2: f64) -> ParallelSplit {
    if z1 <= 0.0 || z2 <= 0.0 {
        return ParallelSplit {
            current_1: total_current / 2.0,
            current_2: total_current / 2.0,
            imbalance_percent: 0.0,
            imbalanced: false,
        };
    }
    let current_1 = total_current * z2 / (z1 + z2);
    let current_2 = total_current * z1 / (z1 + z2);
    let ratio_1 = current_1 / total_current * 100.0;
    let imbalance = (ratio_1 - 50.0).abs();
    ParallelSplit {
        current_1,
        current_2,
        imbalance_percent: imbalance,
        imbalanced: imbalance > 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_current_from_pure_resistance() {
        let i = FaultCurrent::from_voltage_and_impedance(230.0, Impedance::new(0.23, 0.0));
        assert!((i.magnitude - 1000.0).abs() < 1e-9);
        assert_eq!(i.angle_deg, 0.0);
    }

    #[test]
    fn fault_current_lags_inductive_impedance() {
        let i = FaultCurrent::from_voltage_and_impedance(230.0, Impedance::new(0.1, 0.1));
        assert!((i.angle_deg - (-45.0)).abs() < 1e-9);
    }

    #[test]
    fn three_phase_fault_divides_line_voltage_by_sqrt3() {
        let source = Impedance::new(0.1, 0.0);
        let cable = Impedance::new(0.3, 0.0);
        let three = fault_current(400.0, source, cable, Phase::Three);
        let single = fault_current(400.0, source, cable, Phase::Single);
        // 400/√3 V over 0.4 Ω.
        assert!((three.magnitude - 400.0 / 3f64.sqrt() / 0.4).abs() < 1e-9);
        assert!((single.magnitude - 3f64.sqrt() * three.magnitude).abs() < 1e-9);
    }

    #[test]
    fn zero_impedance_is_zero_sentinel() {
        let i = FaultCurrent::from_voltage_and_impedance(230.0, Impedance::default());
        assert_eq!(i.magnitude, 0.0);
    }

    #[test]
    fn ik_min_adds_supply_and_doubled_loop() {
        // Supply 230 V / 460 A = 0.5 Ω; loop 2×0.25 Ω; total 1 Ω resistive.
        let i = ik_min_service(230.0, 460.0, Impedance::new(0.25, 0.0));
        assert!((i.magnitude - 230.0).abs() < 1e-9);
    }

    #[test]
    fn ik_min_group_zero_supply_is_zero() {
        let i = ik_min_group(230.0, 0.0, Impedance::new(0.1, 0.1), Impedance::new(0.1, 0.1));
        assert_eq!(i.magnitude, 0.0);
    }

    #[test]
    fn ik_min_sequential_legs_match_combined_path() {
        let service = Impedance::new(0.08, 0.02);
        let group = Impedance::new(0.15, 0.03);
        let combined = ik_min_group(230.0, 500.0, service.series(group), Impedance::default());
        let split = ik_min_group(230.0, 500.0, service, group);
        assert!((combined.magnitude - split.magnitude).abs() < 1e-9);
    }

    #[test]
    fn ik_max_with_no_cable_recovers_trafo_current() {
        let (i, z) = ik_max_service(230.0, 10_000.0, 0.3, Impedance::default());
        assert!((i.magnitude - 10_000.0).abs() < 1e-6);
        assert!((z - 230.0 / 10_000.0).abs() < 1e-12);
    }

    #[test]
    fn thermal_check_is_strict() {
        // k=143, S=6 → withstand 736164 A²s; equal let-through must fail.
        let check = thermal_check(143.0, 6.0, 858.0, 736_164.0 / (858.0 * 858.0));
        assert!(!check.ok);
        let check = thermal_check(143.0, 6.0, 858.0, 0.5);
        assert!(check.ok);
        assert!((check.cable_energy - 736_164.0).abs() < 1e-6);
    }

    #[test]
    fn reduced_neutral_inverts_thermal_limit() {
        let s = reduced_neutral_size(1430.0, 1.0, 143.0);
        assert!((s - 10.0).abs() < 1e-9);
        assert_eq!(reduced_neutral_size(0.0, 1.0, 143.0), 0.0);
    }

    #[test]
    fn transformer_decomposition_is_consistent() {
        let t = transformer_impedance(400_000.0, 400.0, 4.0, 4600.0);
        assert!((t.z.magnitude() - t.magnitude).abs() < 1e-12);
        assert!(t.cos_phi >= 0.0 && t.cos_phi <= 1.0);
        assert!((t.cos_phi * t.cos_phi + t.sin_phi * t.sin_phi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn network_impedance_magnitude_and_sentinel() {
        let z = network_impedance(400.0, 10_000_000.0, 0.3);
        assert!((z.magnitude() - 400.0 * 400.0 / 10_000_000.0).abs() < 1e-12);
        assert_eq!(network_impedance(400.0, 0.0, 0.3), Impedance::default());
    }

    #[test]
    fn load_current_sum_with_unity_power_factors_is_arithmetic() {
        let (total, cos_phi) = add_load_currents(&[(10.0, 1.0), (16.0, 1.0)]);
        assert!((total - 26.0).abs() < 1e-12);
        assert_eq!(cos_phi, 1.0);
    }

    #[test]
    fn load_current_sum_is_shorter_than_magnitude_sum() {
        let (total, cos_phi) = add_load_currents(&[(10.0, 1.0), (10.0, 0.5)]);
        assert!(total < 20.0);
        assert!(cos_phi < 1.0 && cos_phi > 0.5);
    }

    #[test]
    fn parallel_split_conserves_current_and_flags_imbalance() {
        let split = parallel_cable_currents(100.0, 1.0, 3.0);
        assert!((split.current_1 + split.current_2 - 100.0).abs() < 1e-12);
        assert!(split.current_1 > split.current_2);
        assert!(split.imbalanced);

        let even = parallel_cable_currents(100.0, 2.0, 2.0);
        assert!(!even.imbalanced);
        assert_eq!(even.current_1, 50.0);
    }
}
