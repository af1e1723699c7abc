//! Unfolding of the alternating mode velocity.
//!
//! In alternating mode the velocity estimated from the interleaved H and V pulses (`vel`) is noisy
//! and folds at the full nyquist, while the velocity from the lag-2 H and V co-polar pulses
//! (`vel_hv`) is less noisy but folds at half the nyquist. Comparing the two gives the number of
//! nyquist intervals needed to unfold `vel_hv` at each gate. Where that comparison is ambiguous
//! the interval is inferred from the confident gates around the ambiguous run.
//!
//! The computation runs in stages over a single beam:
//!
//! 1. remove the clutter induced oscillation between 0 and the nyquist in `vel`,
//! 2. compute the fold interval and its confidence at each gate,
//! 3. find the runs of gates with no trusted fold interval,
//! 4. infer a velocity window for each run from votes of the gates around it,
//! 5. unfold every gate,
//! 6. correct runs that ended up folded by half the nyquist relative to their neighbors,
//! 7. write the unfolded velocity and diagnostics back to the moments.
use crate::{
    config::UnfoldConfig,
    error::{Result, UnfoldError},
    moments::MomentsFields,
};
use itertools::izip;
use log::debug;
use optional::Optioned;

mod assign;
mod clutter;
mod fold;
mod gaps;

pub use gaps::GateRun;

/// Working values computed for each gate, parallel to the moments array.
#[derive(Clone, Copy, Debug, Default)]
struct CompFields {
    // Clutter fix
    vel_zero: bool,
    vel_nyquist: bool,
    frac_zero: Optioned<f64>,
    frac_nyquist: Optioned<f64>,
    fix_flag: bool,

    // Fold estimate
    vel_diff: f64,
    fold_interval: i32,
    fold_confidence: f64,
    unfold_interval: Option<i32>,

    // Window the velocity is constrained to when the gate is in a gap
    vel_window: Option<(f64, f64)>,
    mean_confidence: Optioned<f64>,

    // Results
    vel_alt: f64,
    unfolded_run: Optioned<f64>,
}

/// Description of what the unfolding did to one array of moments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnfoldSummary {
    /// Number of gates processed.
    pub num_gates: usize,
    /// Gates shifted by the clutter 0/nyquist fix.
    pub num_clutter_fixed: usize,
    /// Gates unfolded with a trusted fold interval.
    pub num_confident: usize,
    /// Gates flagged as noise, left as they were.
    pub num_noise: usize,
    /// Runs of gates whose fold interval was inferred.
    pub gap_runs: Vec<GateRun>,
    /// Gates moved by the secondary fold correction.
    pub num_fold_corrected: usize,
}

/// Unfolds alternating mode velocity using the H/V velocity.
///
/// The unfolder holds no state between calls, so a single one may be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltVelUnfolder {
    config: UnfoldConfig,
}

impl AltVelUnfolder {
    /// Create an unfolder with the given tuning.
    pub fn new(config: UnfoldConfig) -> Result<Self> {
        config.validate()?;
        Ok(AltVelUnfolder { config })
    }

    /// The tuning used by this unfolder.
    pub fn config(&self) -> &UnfoldConfig {
        &self.config
    }

    /// Unfold the alternating mode velocity of a beam in place.
    ///
    /// On return `vel` holds the unfolded velocity and `vel_alt` the alternating mode velocity
    /// (after removal of the clutter 0/nyquist oscillation). The fold diagnostics are filled in for
    /// every gate. Gates flagged as noise keep their alternating mode velocity.
    ///
    /// The nyquist velocity must be finite and positive, otherwise the moments are left untouched
    /// and an error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::{AltVelUnfolder, MomentsFields};
    ///
    /// let nyquist = 20.0;
    /// let mut fields: Vec<MomentsFields> = (0..15)
    ///     .map(|_| MomentsFields::new(-14.0, 6.5, 0.9, false))
    ///     .collect();
    ///
    /// let summary = AltVelUnfolder::default()
    ///     .compute_vel_alt(&mut fields, nyquist)
    ///     .unwrap();
    ///
    /// assert_eq!(summary.num_confident, 15);
    /// assert!(fields.iter().all(|gate| gate.vel == 6.5 && gate.vel_alt == -14.0));
    /// ```
    pub fn compute_vel_alt(
        &self,
        fields: &mut [MomentsFields],
        nyquist: f64,
    ) -> Result<UnfoldSummary> {
        if !(nyquist.is_finite() && nyquist > 0.0) {
            return Err(UnfoldError::InvalidNyquist(nyquist));
        }

        if fields.is_empty() {
            return Ok(UnfoldSummary::default());
        }

        let config = &self.config;
        let mut comp = vec![CompFields::default(); fields.len()];

        let num_clutter_fixed = clutter::fix_alt_mode_vel(fields, &mut comp, nyquist, config);

        fold::compute_fold_intervals(fields, &mut comp, nyquist, config);

        let mut gap_runs = gaps::find_gap_runs(fields, &comp);
        for run in gap_runs.iter_mut() {
            gaps::compute_fold_interval(run, fields, &mut comp, nyquist, config);
        }

        assign::assign_unfolded_vel(fields, &mut comp, nyquist);

        let num_fold_corrected = gap_runs
            .iter()
            .map(|run| assign::correct_bad_fold(run, &mut comp, nyquist, config))
            .sum();

        finalize(fields, &comp);

        let summary = UnfoldSummary {
            num_gates: fields.len(),
            num_clutter_fixed,
            num_confident: comp.iter().filter(|cf| cf.unfold_interval.is_some()).count(),
            num_noise: fields.iter().filter(|gate| gate.noise_flag).count(),
            gap_runs,
            num_fold_corrected,
        };

        debug!(
            "Unfolded {} gates with nyquist {:.2}: {} confident, {} noise, {} clutter fixed, \
             {} gaps, {} fold corrected",
            summary.num_gates,
            nyquist,
            summary.num_confident,
            summary.num_noise,
            summary.num_clutter_fixed,
            summary.gap_runs.len(),
            summary.num_fold_corrected
        );

        Ok(summary)
    }
}

/// Unfold the alternating mode velocity of a beam in place with the default tuning.
///
/// See [`AltVelUnfolder::compute_vel_alt`].
pub fn compute_vel_alt(fields: &mut [MomentsFields], nyquist: f64) -> Result<UnfoldSummary> {
    AltVelUnfolder::default().compute_vel_alt(fields, nyquist)
}

/// Write the results back to the moments.
fn finalize(fields: &mut [MomentsFields], comp: &[CompFields]) {
    debug_assert_eq!(fields.len(), comp.len());

    // Noise gates are not trusted to unfold, they keep the alternating mode velocity.
    let unfolded: Vec<f64> = izip!(fields.iter(), comp)
        .map(|(gate, cf)| if gate.noise_flag { gate.vel } else { cf.vel_alt })
        .collect();

    for (gate, cf, vel) in izip!(fields.iter_mut(), comp, unfolded) {
        gate.vel_alt = gate.vel;
        gate.vel = vel;

        gate.vel_alt_fold_interval = cf.fold_interval;
        gate.vel_alt_fold_confidence = cf.fold_confidence;
        gate.vel_diff = cf.vel_diff;
        gate.vel_unfold_interval = Optioned::from(cf.unfold_interval);

        gate.test2 = cf.frac_zero;
        gate.test3 = cf.frac_nyquist;
        gate.test4 = cf.mean_confidence;
        gate.test5 = cf.unfolded_run;
    }
}
