//! Assignment of the unfolded velocity, and correction of runs folded by half the nyquist.
use super::{gaps::GateRun, CompFields};
use crate::{
    config::UnfoldConfig,
    moments::MomentsFields,
    utility::{constrain_to_window, wrap_to_nyquist},
};
use itertools::izip;
use log::trace;
use optional::some;

/// Unfold the H/V velocity of every gate.
///
/// Gates with a trusted interval are shifted by it. Gates in a gap are moved into the window
/// inferred for the gap. Anything else (noise) keeps the alternating mode velocity.
pub(super) fn assign_unfolded_vel(fields: &[MomentsFields], comp: &mut [CompFields], nyquist: f64) {
    debug_assert_eq!(fields.len(), comp.len());

    for (gate, cf) in izip!(fields, comp.iter_mut()) {
        cf.vel_alt = match (cf.unfold_interval, cf.vel_window) {
            (Some(interval), _) => {
                wrap_to_nyquist(gate.vel_hv + f64::from(interval) * nyquist, nyquist)
            }
            (None, Some((min_vel, max_vel))) => {
                let vel = constrain_to_window(gate.vel_hv, min_vel, max_vel, nyquist);
                constrain_to_window(vel, -nyquist, nyquist, 2.0 * nyquist)
            }
            (None, None) => gate.vel,
        };
    }
}

/// Correct a gap that was unfolded half a nyquist interval away from its neighbors.
///
/// Only velocities in the band where such a fold can be told apart from real shear are looked
/// at. If the confident gates on both sides of the gap are dominated by one sign and the gap
/// holds in-band velocities of the other sign, those are moved one nyquist toward the sign of
/// the neighbors.
///
/// Returns the number of gates corrected.
pub(super) fn correct_bad_fold(
    run: &GateRun,
    comp: &mut [CompFields],
    nyquist: f64,
    config: &UnfoldConfig,
) -> usize {
    let (band_low, band_high) = (config.fold_band.0 * nyquist, config.fold_band.1 * nyquist);
    let in_band = |vel: f64| {
        let speed = vel.abs();
        speed > band_low && speed < band_high
    };

    // (negative, positive) counts
    let count_signs = |counts: (usize, usize), vel: f64| {
        if vel < 0.0 {
            (counts.0 + 1, counts.1)
        } else {
            (counts.0, counts.1 + 1)
        }
    };

    let (num_neg_in, num_pos_in) = comp[run.gates()]
        .iter()
        .map(|cf| cf.vel_alt)
        .filter(|&vel| in_band(vel))
        .fold((0, 0), count_signs);

    if num_neg_in + num_pos_in == 0 {
        return 0;
    }

    let before = run.start.saturating_sub(config.fold_context_len)..run.start;
    let after = run.end..(run.end + config.fold_context_len).min(comp.len());

    let (num_neg_out, num_pos_out) = comp[before]
        .iter()
        .chain(&comp[after])
        .filter(|cf| cf.fold_confidence > config.min_fold_confidence)
        .map(|cf| cf.vel_alt)
        .filter(|&vel| in_band(vel))
        .fold((0, 0), count_signs);

    if num_neg_out + num_pos_out == 0 {
        return 0;
    }

    let ratio = config.fold_majority_ratio;
    let to_positive = if num_pos_out as f64 >= ratio * num_neg_out as f64 {
        true
    } else if num_neg_out as f64 >= ratio * num_pos_out as f64 {
        false
    } else {
        return 0;
    };

    let num_wrong_sign = if to_positive { num_neg_in } else { num_pos_in };
    if num_wrong_sign == 0 {
        return 0;
    }

    let shift = if to_positive { nyquist } else { -nyquist };
    let mut num_corrected = 0;
    for cf in &mut comp[run.gates()] {
        if in_band(cf.vel_alt) && (cf.vel_alt < 0.0) == to_positive {
            cf.vel_alt += shift;
            cf.unfolded_run = some(cf.vel_alt);
            num_corrected += 1;
        }
    }

    trace!(
        "Gap {}..{}: outside {} negative {} positive, moved {} gates by {:.2}",
        run.start,
        run.end,
        num_neg_out,
        num_pos_out,
        num_corrected,
        shift
    );

    num_corrected
}
