//! Generic trip-time interpolation over digitized time-current curves.

/// Trip time in seconds at `current`, interpolated over `points`.
///
/// Points are (current A, time s) pairs in any order; they are sorted
/// ascending by current before use. Currents below the first sample or
/// above the last sample clamp to the end samples rather than
/// extrapolating. In between, interpolation is linear in log-log space,
/// which tracks the power-law shape of time-current characteristics over
/// several decades.
///
/// Returns `None` for an empty curve or a non-positive or non-finite
/// current. Exact sample hits return the sampled time unchanged.
pub fn trip_time(points: &[(f64, f64)], current: f64) -> Option<f64> {
    if points.is_empty() || !current.is_finite() || current <= 0.0 {
        return None;
    }

    let mut sorted: Vec<(f64, f64)> = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first_i, first_t) = sorted[0];
    let (last_i, last_t) = sorted[sorted.len() - 1];
    if current <= first_i {
        return Some(first_t);
    }
    if current >= last_i {
        return Some(last_t);
    }

    for pair in sorted.windows(2) {
        let (i1, t1) = pair[0];
        let (i2, t2) = pair[1];
        if current == i1 {
            return Some(t1);
        }
        if current == i2 {
            return Some(t2);
        }
        if current > i1 && current < i2 {
            return Some(interpolate_segment(i1, t1, i2, t2, current));
        }
    }

    // Unreachable with sorted finite data, but keep the clamp semantics.
    Some(last_t)
}

fn interpolate_segment(i1: f64, t1: f64, i2: f64, t2: f64, current: f64) -> f64 {
    let loggable = i1 > 0.0
        && i2 > 0.0
        && t1 > 0.0
        && t2 > 0.0
        && i1.is_finite()
        && i2.is_finite()
        && t1.is_finite()
        && t2.is_finite()
        && i1 != i2;

    if !loggable {
        // Degenerate bracket: repeated or non-positive samples occur in the
        // digitized data. Fall back to plain linear interpolation so no
        // NaN/Infinity leaks out.
        if i1 == i2 {
            return t1;
        }
        let ratio = (current - i1) / (i2 - i1);
        return t1 + ratio * (t2 - t1);
    }

    let ratio = (current.log10() - i1.log10()) / (i2.log10() - i1.log10());
    let log_t = t1.log10() + ratio * (t2.log10() - t1.log10());
    10f64.powf(log_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVE: &[(f64, f64)] = &[(10.0, 100.0), (100.0, 1.0), (1000.0, 0.01)];

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(trip_time(&[], 50.0), None);
        assert_eq!(trip_time(CURVE, 0.0), None);
        assert_eq!(trip_time(CURVE, -3.0), None);
        assert_eq!(trip_time(CURVE, f64::NAN), None);
        assert_eq!(trip_time(CURVE, f64::INFINITY), None);
    }

    #[test]
    fn clamps_at_both_ends() {
        assert_eq!(trip_time(CURVE, 1.0), Some(100.0));
        assert_eq!(trip_time(CURVE, 10.0), Some(100.0));
        assert_eq!(trip_time(CURVE, 1000.0), Some(0.01));
        assert_eq!(trip_time(CURVE, 50_000.0), Some(0.01));
    }

    #[test]
    fn exact_sample_hits_return_sampled_time() {
        for &(i, t) in CURVE {
            assert_eq!(trip_time(CURVE, i), Some(t));
        }
    }

    #[test]
    fn interpolates_in_log_log_space() {
        // CURVE is exactly t = 10^4 / I^2, so any midpoint must land on it.
        let t = trip_time(CURVE, 31.622776601683793).unwrap();
        assert!((t - 10.0).abs() < 1e-9);
        let t = trip_time(CURVE, 300.0).unwrap();
        assert!((t - 1e4 / (300.0 * 300.0)).abs() < 1e-9);
    }

    #[test]
    fn accepts_unsorted_points() {
        let shuffled = [(1000.0, 0.01), (10.0, 100.0), (100.0, 1.0)];
        assert_eq!(trip_time(&shuffled, 100.0), Some(1.0));
    }

    #[test]
    fn degenerate_bracket_falls_back_to_linear() {
        // Zero time at the lower sample cannot be interpolated in log space.
        let curve = [(10.0, 0.0), (20.0, 4.0)];
        assert_eq!(trip_time(&curve, 15.0), Some(2.0));
    }

    #[test]
    fn repeated_current_samples_do_not_produce_nan() {
        let curve = [(10.0, 5.0), (10.0, 4.0), (20.0, 1.0)];
        let t = trip_time(&curve, 12.0).unwrap();
        assert!(t.is_finite());
    }
}
