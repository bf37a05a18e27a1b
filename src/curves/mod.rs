//! Protective-device time-current curves: digitized fuse data, analytic
//! MCB models, and the shared log-log interpolator.

pub mod diazed;
pub mod interp;
pub mod mcb;
pub mod neozed;

pub use interp::trip_time;

use std::fmt;

use serde::Deserialize;

/// How a curve's current axis is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveScale {
    /// Points are (fault current in A, time in s).
    Absolute,
    /// Points are (m = I/In, time in s); normalized across ratings.
    Multiplier,
}

/// Protective device family. Each family pairs a rating ladder with its
/// curve set; the twelve-plus curve sets all feed the same interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuseFamily {
    DiazedGg,
    NeozedGg,
    Nh00,
    Nh0,
    Nh1,
    McbB,
    McbC,
    McbD,
}

const DIAZED_RATINGS: &[u32] = &[2, 4, 6, 10, 13, 16, 20, 25, 32, 35, 40, 50, 63, 80, 100];
const NEOZED_RATINGS: &[u32] = &[2, 4, 6, 10, 16, 20, 25, 35, 50, 63, 80, 100];
const NH00_RATINGS: &[u32] = &[2, 4, 6, 10, 16, 20, 25, 32, 35, 40, 50, 63, 80, 100, 125, 160];
const NH0_RATINGS: &[u32] = &[6, 10, 16, 20, 25, 32, 35, 40, 50, 63, 80, 100, 125, 160];
const NH1_RATINGS: &[u32] = &[16, 20, 25, 35, 40, 50, 63, 80, 100, 125, 160, 200, 224, 250];
const MCB_RATINGS: &[u32] = &[6, 10, 13, 16, 20, 25, 32, 40, 50, 63];

/// Ratings that carry their own digitized Diazed curve. Other ladder
/// ratings borrow the nearest of these.
const DIAZED_CURVE_RATINGS: &[(u32, &[(f64, f64)])] = &[
    (2, diazed::DIAZED_2A_POINTS),
    (4, diazed::DIAZED_4A_POINTS),
    (6, diazed::DIAZED_6A_POINTS),
    (10, diazed::DIAZED_10A_POINTS),
    (16, diazed::DIAZED_16A_POINTS),
    (20, diazed::DIAZED_20A_POINTS),
    (35, diazed::DIAZED_35A_POINTS),
    (50, diazed::DIAZED_50A_POINTS),
    (63, diazed::DIAZED_63A_POINTS),
];

const NEOZED_CURVE_RATINGS: &[(u32, &[(f64, f64)])] = &[
    (2, neozed::NEOZED_2A_POINTS),
    (4, neozed::NEOZED_4A_POINTS),
    (6, neozed::NEOZED_6A_POINTS),
    (10, neozed::NEOZED_10A_POINTS),
    (16, neozed::NEOZED_16A_POINTS),
    (20, neozed::NEOZED_20A_POINTS),
    (25, neozed::NEOZED_25A_POINTS),
    (35, neozed::NEOZED_35A_POINTS),
    (50, neozed::NEOZED_50A_POINTS),
    (63, neozed::NEOZED_63A_POINTS),
    (80, neozed::NEOZED_80A_POINTS),
    (100, neozed::NEOZED_100A_POINTS),
];

impl FuseFamily {
    pub fn label(self) -> &'static str {
        match self {
            FuseFamily::DiazedGg => "Diazed gG",
            FuseFamily::NeozedGg => "Neozed gG",
            FuseFamily::Nh00 => "NH00",
            FuseFamily::Nh0 => "NH0",
            FuseFamily::Nh1 => "NH1",
            FuseFamily::McbB => "MCB B",
            FuseFamily::McbC => "MCB C",
            FuseFamily::McbD => "MCB D",
        }
    }

    /// The rated currents this family is manufactured in, ascending.
    pub fn ratings(self) -> &'static [u32] {
        match self {
            FuseFamily::DiazedGg => DIAZED_RATINGS,
            FuseFamily::NeozedGg => NEOZED_RATINGS,
            FuseFamily::Nh00 => NH00_RATINGS,
            FuseFamily::Nh0 => NH0_RATINGS,
            FuseFamily::Nh1 => NH1_RATINGS,
            FuseFamily::McbB | FuseFamily::McbC | FuseFamily::McbD => MCB_RATINGS,
        }
    }

    pub fn scale(self) -> CurveScale {
        match self {
            FuseFamily::DiazedGg | FuseFamily::NeozedGg => CurveScale::Absolute,
            _ => CurveScale::Multiplier,
        }
    }

    /// Multiplier on In below which the device is assumed not to clear a
    /// fault: 5× for gG fuses and MCB B, 10× MCB C, 20× MCB D.
    pub fn imin_factor(self) -> f64 {
        match self {
            FuseFamily::McbC => 10.0,
            FuseFamily::McbD => 20.0,
            _ => 5.0,
        }
    }

    /// Resolves the curve for a rated current.
    ///
    /// Ratings without their own digitized curve borrow the nearest curve
    /// in the family (ties resolve downward). Returns `None` when the
    /// rating is not in the family's ladder.
    pub fn curve(self, rating_a: u32) -> Option<FuseCurve> {
        if !self.ratings().contains(&rating_a) {
            return None;
        }

        let (curve_rating_a, points): (u32, &'static [(f64, f64)]) = match self {
            FuseFamily::DiazedGg => nearest_curve(DIAZED_CURVE_RATINGS, rating_a),
            FuseFamily::NeozedGg => nearest_curve(NEOZED_CURVE_RATINGS, rating_a),
            // NH families share the normalized gG multiplier curve; per-rating
            // digitizations are not available.
            FuseFamily::Nh00 | FuseFamily::Nh0 | FuseFamily::Nh1 => {
                (rating_a, diazed::GG_CURVE_60)
            }
            FuseFamily::McbB => (rating_a, mcb::b_curve()),
            FuseFamily::McbC => (rating_a, mcb::c_curve()),
            FuseFamily::McbD => (rating_a, mcb::d_curve()),
        };

        Some(FuseCurve {
            family: self,
            rating_a,
            curve_rating_a,
            points,
        })
    }
}

impl fmt::Display for FuseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn nearest_curve(
    available: &'static [(u32, &'static [(f64, f64)])],
    rating_a: u32,
) -> (u32, &'static [(f64, f64)]) {
    // Strictly-less comparison keeps the earlier (lower) rating on a tie.
    available
        .iter()
        .copied()
        .fold(available[0], |best, candidate| {
            if candidate.0.abs_diff(rating_a) < best.0.abs_diff(rating_a) {
                candidate
            } else {
                best
            }
        })
}

/// A resolved time-current curve for one device rating.
#[derive(Debug, Clone, Copy)]
pub struct FuseCurve {
    pub family: FuseFamily,
    /// The rating the caller asked for.
    pub rating_a: u32,
    /// The rating whose digitized points back this curve.
    pub curve_rating_a: u32,
    pub points: &'static [(f64, f64)],
}

impl FuseCurve {
    /// Trip time in seconds at fault current `ik` in amperes.
    pub fn trip_time(&self, ik: f64) -> Option<f64> {
        match self.family.scale() {
            CurveScale::Absolute => interp::trip_time(self.points, ik),
            CurveScale::Multiplier => {
                if self.curve_rating_a == 0 {
                    return None;
                }
                interp::trip_time(self.points, ik / self.curve_rating_a as f64)
            }
        }
    }

    /// Smallest fault current assumed to clear the device.
    pub fn min_trip_current(&self) -> f64 {
        self.family.imin_factor() * self.rating_a as f64
    }
}

/// Picks an MCB type from the available minimum fault current.
///
/// With a usable Ik,min the absolute thresholds apply: above 200 A type D,
/// above 100 A type C, otherwise type B. Without one, fall back to a
/// heuristic on rating and installation method.
pub fn auto_select_mcb(install_method: &str, rated_a: u32, ik_min: Option<f64>) -> FuseFamily {
    if let Some(ik) = ik_min {
        if ik > 0.0 {
            if ik > 200.0 {
                return FuseFamily::McbD;
            }
            if ik > 100.0 {
                return FuseFamily::McbC;
            }
            return FuseFamily::McbB;
        }
    }

    if rated_a > 63 {
        return FuseFamily::McbD;
    }

    let air_install = install_method.starts_with('A')
        || install_method.starts_with('B')
        || install_method == "C";
    if rated_a <= 16 && air_install {
        return FuseFamily::McbB;
    }

    FuseFamily::McbC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_without_own_curve_borrow_nearest() {
        let c = FuseFamily::DiazedGg.curve(13).unwrap();
        assert_eq!(c.curve_rating_a, 10);
        let c = FuseFamily::DiazedGg.curve(32).unwrap();
        assert_eq!(c.curve_rating_a, 35);
        let c = FuseFamily::DiazedGg.curve(40).unwrap();
        assert_eq!(c.curve_rating_a, 35);
        let c = FuseFamily::DiazedGg.curve(100).unwrap();
        assert_eq!(c.curve_rating_a, 63);
    }

    #[test]
    fn unknown_rating_yields_none() {
        assert!(FuseFamily::DiazedGg.curve(7).is_none());
        assert!(FuseFamily::McbB.curve(80).is_none());
        assert!(FuseFamily::Nh1.curve(10).is_none());
    }

    #[test]
    fn neozed_ratings_all_have_their_own_curve() {
        for &rating in FuseFamily::NeozedGg.ratings() {
            let c = FuseFamily::NeozedGg.curve(rating).unwrap();
            assert_eq!(c.curve_rating_a, rating);
        }
    }

    #[test]
    fn min_trip_current_scales_with_family_factor() {
        assert_eq!(FuseFamily::DiazedGg.curve(10).unwrap().min_trip_current(), 50.0);
        assert_eq!(FuseFamily::McbB.curve(16).unwrap().min_trip_current(), 80.0);
        assert_eq!(FuseFamily::McbC.curve(16).unwrap().min_trip_current(), 160.0);
        assert_eq!(FuseFamily::McbD.curve(16).unwrap().min_trip_current(), 320.0);
    }

    #[test]
    fn multiplier_families_scale_by_rating() {
        let c16 = FuseFamily::McbB.curve(16).unwrap();
        let c32 = FuseFamily::McbB.curve(32).unwrap();
        // Same multiplier, so same trip time.
        let t16 = c16.trip_time(16.0 * 2.0).unwrap();
        let t32 = c32.trip_time(32.0 * 2.0).unwrap();
        assert_eq!(t16, t32);
    }

    #[test]
    fn mcb_auto_select_uses_ik_min_thresholds() {
        assert_eq!(auto_select_mcb("C", 16, Some(250.0)), FuseFamily::McbD);
        assert_eq!(auto_select_mcb("C", 16, Some(150.0)), FuseFamily::McbC);
        assert_eq!(auto_select_mcb("C", 16, Some(80.0)), FuseFamily::McbB);
        assert_eq!(auto_select_mcb("C", 16, Some(30.0)), FuseFamily::McbB);
    }

    #[test]
    fn mcb_auto_select_heuristic_without_ik_min() {
        assert_eq!(auto_select_mcb("C", 100, None), FuseFamily::McbD);
        assert_eq!(auto_select_mcb("B1", 13, None), FuseFamily::McbB);
        assert_eq!(auto_select_mcb("D1", 13, None), FuseFamily::McbC);
        assert_eq!(auto_select_mcb("C", 40, None), FuseFamily::McbC);
    }
}
