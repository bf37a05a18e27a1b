//! Analytic MCB time-current models (types B, C and D) and the 60-point
//! multiplier curves generated from them.
//!
//! MCB characteristics are smooth enough to model piecewise instead of
//! digitizing: a conventional non-trip plateau up to 1.45×In, two thermal
//! power-law zones, and an instantaneous magnetic zone modelled as 10 ms.

use std::sync::OnceLock;

const M_MIN: f64 = 1.45;
const THERMAL_P: f64 = 7.2526632648363;
const CURVE_POINTS: usize = 60;

/// MCB type B trip time in seconds at current multiplier `m` = I/In.
/// Magnetic release at 3–5×In.
pub fn mcb_b_time(m: f64) -> f64 {
    if m <= 1.45 {
        return 3600.0;
    }
    if m <= 2.55 {
        return 3600.0 * (1.45 / m).powf(THERMAL_P);
    }
    if m <= 3.0 {
        let q = 4.74143567257599;
        return 60.0 * (2.55 / m).powf(q);
    }
    0.01
}

/// MCB type C trip time in seconds. Magnetic release at 5–10×In.
pub fn mcb_c_time(m: f64) -> f64 {
    if m <= 1.45 {
        return 3600.0;
    }
    if m <= 2.55 {
        return 3600.0 * (1.45 / m).powf(THERMAL_P);
    }
    if m <= 5.0 {
        let q = 4.54785634237691;
        return 60.0 * (2.55 / m).powf(q);
    }
    0.01
}

/// MCB type D trip time in seconds. Magnetic release at 10–20×In.
pub fn mcb_d_time(m: f64) -> f64 {
    if m <= 1.45 {
        return 3600.0;
    }
    if m <= 2.55 {
        return 3600.0 * (1.45 / m).powf(THERMAL_P);
    }
    if m <= 10.0 {
        let q = 4.3;
        return 60.0 * (2.8 / m).powf(q);
    }
    0.01
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McbKind {
    B,
    C,
    D,
}

/// Samples a kind's time function at `n` log-spaced multipliers between
/// 1.45 and the kind's magnetic upper bound, rounding both coordinates to
/// four decimals as the digitized curves do.
fn generate(kind: McbKind, n: usize) -> Vec<(f64, f64)> {
    let m_max: f64 = match kind {
        McbKind::B => 20.0,
        McbKind::C => 30.0,
        McbKind::D => 40.0,
    };
    let time_fn = match kind {
        McbKind::B => mcb_b_time,
        McbKind::C => mcb_c_time,
        McbKind::D => mcb_d_time,
    };

    let log_min = M_MIN.log10();
    let log_max = m_max.log10();

    (0..n)
        .map(|i| {
            let log_m = log_min + (log_max - log_min) * i as f64 / (n - 1) as f64;
            let m = 10f64.powf(log_m);
            (round4(m), round4(time_fn(m)))
        })
        .collect()
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// The 60-point type B multiplier curve, generated once per process.
pub fn b_curve() -> &'static [(f64, f64)] {
    static CURVE: OnceLock<Vec<(f64, f64)>> = OnceLock::new();
    CURVE.get_or_init(|| generate(McbKind::B, CURVE_POINTS))
}

/// The 60-point type C multiplier curve.
pub fn c_curve() -> &'static [(f64, f64)] {
    static CURVE: OnceLock<Vec<(f64, f64)>> = OnceLock::new();
    CURVE.get_or_init(|| generate(McbKind::C, CURVE_POINTS))
}

/// The 60-point type D multiplier curve.
pub fn d_curve() -> &'static [(f64, f64)] {
    static CURVE: OnceLock<Vec<(f64, f64)>> = OnceLock::new();
    CURVE.get_or_init(|| generate(McbKind::D, CURVE_POINTS))
}
