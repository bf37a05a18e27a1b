//! Load aggregation: the Velander formula, area-based loads, and
//! power/current conversions.

use crate::types::Phase;

/// Design load in W/m² by building use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCategory {
    Dwelling,
    Supermarket,
    Retail,
    Office,
    Warehouse,
}

impl LoadCategory {
    pub fn watts_per_m2(self) -> f64 {
        match self {
            LoadCategory::Dwelling => 30.0,
            LoadCategory::Supermarket => 110.0,
            LoadCategory::Retail => 70.0,
            LoadCategory::Office => 40.0,
            LoadCategory::Warehouse => 10.0,
        }
    }
}

/// Velander aggregation of `n_units` dwellings with an average annual
/// consumption of `w_watts` each: P = k1·W·n + k2·√(W·n), evaluated in kW
/// with k1 = 0.24 and k2 = 2.31 (year-round dwellings without electric
/// heating). Returns watts.
pub fn velander_power(w_watts: f64, n_units: f64) -> f64 {
    let k1 = 0.24;
    let k2 = 2.31;
    let w_kw = w_watts / 1000.0;
    let p_kw = k1 * w_kw * n_units + k2 * (w_kw * n_units).sqrt();
    p_kw * 1000.0
}

/// Design power from floor area and use category.
pub fn power_from_area(area_m2: f64, category: LoadCategory) -> f64 {
    area_m2 * category.watts_per_m2()
}

/// Line current for a power draw: P = √3·U·I·cosφ three-phase, P = U·I·cosφ
/// single-phase.
pub fn watts_to_amps(watts: f64, voltage: f64, phase: Phase, cos_phi: f64) -> f64 {
    match phase {
        Phase::Three => watts / (3f64.sqrt() * voltage * cos_phi),
        Phase::Single => watts / (voltage * cos_phi),
    }
}

/// Inverse of [`watts_to_amps`].
pub fn amps_to_watts(amps: f64, voltage: f64, phase: Phase, cos_phi: f64) -> f64 {
    match phase {
        Phase::Three => 3f64.sqrt() * voltage * amps * cos_phi,
        Phase::Single => voltage * amps * cos_phi,
    }
}

/// Total design power of several loads under a common diversity factor.
pub fn total_power_with_diversity(unit_powers: &[f64], diversity_factor: f64) -> f64 {
    unit_powers.iter().sum::<f64>() * diversity_factor
}
