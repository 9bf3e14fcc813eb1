//! Pointwise sum of remaining caffeine over a dose list.

use super::model::remaining;
use crate::dose::Dose;

/// Remaining caffeine at each of `time_points` for one half-life.
///
/// Doses later than a time point contribute their full amount.
pub fn cumulative(doses: &[Dose], time_points: &[f64], half_life_hr: f64) -> Vec<f64> {
    let mut totals = vec![0.0; time_points.len()];
    for dose in doses {
        let taken_at = dose.total_hours();
        for (total, &t) in totals.iter_mut().zip(time_points) {
            let elapsed = (t - taken_at).max(0.0);
            *total += remaining(dose.amount_mg, elapsed, half_life_hr);
        }
    }
    totals
}

/// Remaining caffeine at a single time.
pub fn cumulative_at(doses: &[Dose], time: f64, half_life_hr: f64) -> f64 {
    cumulative(doses, &[time], half_life_hr)[0]
}
