use super::CompFields;
use crate::{config::UnfoldConfig, moments::MomentsFields};
use itertools::izip;

// i32::MIN is the missing value of Optioned<i32>.
const MIN_INTERVAL: f64 = (i32::MIN + 1) as f64;
const MAX_INTERVAL: f64 = i32::MAX as f64;

/// Fold interval and confidence of each gate from the difference between the two velocities.
pub(super) fn compute_fold_intervals(
    fields: &[MomentsFields],
    comp: &mut [CompFields],
    nyquist: f64,
    config: &UnfoldConfig,
) {
    debug_assert_eq!(fields.len(), comp.len());

    for (gate, cf) in izip!(fields, comp.iter_mut()) {
        let vel_diff = gate.vel - gate.vel_hv;
        let unfold = vel_diff / nyquist;
        let fold_interval = unfold.round();
        let error = unfold - fold_interval;

        let fold_confidence = if gate.noise_flag {
            0.0
        } else {
            // f64::max ignores a NaN error, leaving zero confidence
            (1.0 - 2.0 * error.abs()).max(0.0)
        };

        // An interval too large for an i32 is saturated and never trusted.
        let representable = fold_interval >= MIN_INTERVAL && fold_interval <= MAX_INTERVAL;

        cf.vel_diff = vel_diff;
        cf.fold_interval = if fold_interval.is_nan() {
            0
        } else {
            fold_interval.max(MIN_INTERVAL).min(MAX_INTERVAL) as i32
        };
        cf.fold_confidence = fold_confidence;

        cf.unfold_interval = if gate.noise_flag {
            None
        } else if gate.cpa > config.cpa_no_fold_threshold {
            Some(0)
        } else if representable && fold_confidence > config.min_fold_confidence {
            Some(cf.fold_interval)
        } else {
            None
        };
    }
}
