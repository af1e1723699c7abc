//! Runs of gates whose fold interval could not be trusted, and the velocity window each one is
//! unfolded into.
use super::CompFields;
use crate::{config::UnfoldConfig, moments::MomentsFields};
use itertools::izip;
use log::trace;
use optional::some;
use std::{cmp::Ordering, ops::Range};

/// A contiguous run of gates with no trusted fold interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateRun {
    /// Index of the first gate in the run.
    pub start: usize,
    /// One past the index of the last gate in the run.
    pub end: usize,
    /// Lower limit of the velocity window the run was unfolded into.
    pub min_vel: f64,
    /// Upper limit of the velocity window the run was unfolded into.
    pub max_vel: f64,
    /// Mean fold confidence of the run and the gate on either side of it.
    pub mean_confidence: f64,
}

impl GateRun {
    fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end);

        GateRun {
            start,
            end,
            min_vel: 0.0,
            max_vel: 0.0,
            mean_confidence: 0.0,
        }
    }

    /// Indexes of the gates in the run.
    pub fn gates(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Find the runs of gates that are not noise and have no trusted fold interval.
///
/// A run still open at the end of the beam ends at the last gate.
pub(super) fn find_gap_runs(fields: &[MomentsFields], comp: &[CompFields]) -> Vec<GateRun> {
    debug_assert_eq!(fields.len(), comp.len());

    let mut runs = vec![];
    let mut run_start: Option<usize> = None;

    for (i, gate, cf) in izip!(0usize.., fields, comp) {
        let in_gap = cf.unfold_interval.is_none() && !gate.noise_flag;

        match (run_start, in_gap) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                runs.push(GateRun::new(start, i));
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        runs.push(GateRun::new(start, fields.len()));
    }

    runs
}

/// Infer the velocity window of a run from confidence weighted votes of its fold intervals.
///
/// The run and one gate on either side of it vote for the mid (zero), upper or lower interval.
/// The window is one nyquist wide and centered according to the balance of the votes.
pub(super) fn compute_fold_interval(
    run: &mut GateRun,
    fields: &[MomentsFields],
    comp: &mut [CompFields],
    nyquist: f64,
    config: &UnfoldConfig,
) {
    debug_assert_eq!(fields.len(), comp.len());
    debug_assert!(run.end <= fields.len());

    let first = run.start.saturating_sub(1);
    let last = run.end.min(fields.len() - 1);

    let (sum_mid, sum_upper, sum_lower, sum_confidence, count) =
        izip!(&fields[first..=last], &comp[first..=last])
            .filter(|(gate, _)| !gate.noise_flag)
            .fold(
                (0.0, 0.0, 0.0, 0.0, 0usize),
                |(mut mid, mut upper, mut lower, sum_conf, count), (_, cf)| {
                    let conf = cf.fold_confidence;
                    match cf.fold_interval.cmp(&0) {
                        Ordering::Equal => mid += conf,
                        Ordering::Greater => upper += conf,
                        Ordering::Less => lower += conf,
                    }
                    (mid, upper, lower, sum_conf + conf, count + 1)
                },
            );

    let mean_confidence = if count > 0 {
        sum_confidence / count as f64
    } else {
        0.0
    };

    let shift = config.interval_shift_frac * nyquist;
    let negligible = config.negligible_vote;

    let center = if sum_upper < negligible && sum_lower < negligible {
        // mid interval
        0.0
    } else if sum_lower <= sum_upper && sum_lower <= sum_mid {
        // between mid and upper
        shift * sum_upper / (sum_upper + sum_mid)
    } else if sum_upper <= sum_lower && sum_upper <= sum_mid {
        // between lower and mid
        -shift * sum_lower / (sum_lower + sum_mid)
    } else {
        // wraps from upper to lower
        shift + 0.5 * nyquist * sum_lower / (sum_lower + sum_upper)
    };

    let half_nyquist = nyquist / 2.0;
    run.min_vel = center - half_nyquist;
    run.max_vel = center + half_nyquist;
    run.mean_confidence = mean_confidence;

    for cf in &mut comp[run.gates()] {
        cf.vel_window = Some((run.min_vel, run.max_vel));
        cf.mean_confidence = some(mean_confidence);
    }

    trace!(
        "Gap {}..{}: votes mid {:.2} upper {:.2} lower {:.2}, window [{:.2}, {:.2}]",
        run.start,
        run.end,
        sum_mid,
        sum_upper,
        sum_lower,
        run.min_vel,
        run.max_vel
    );
}
