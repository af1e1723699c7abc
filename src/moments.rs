//! The per-gate moments record shared with the moments computation pipeline.
use crate::keys::MomentField;
use optional::{none, some, Optioned};

/// Moments for a single range gate.
///
/// The input fields (`vel`, `vel_hv`, `cpa`, `noise_flag`) are filled in upstream by the moments
/// computation. The remaining fields are diagnostics written by the unfolding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentsFields {
    /// Alternating mode velocity in m/s. Replaced by the unfolded velocity.
    pub vel: f64,
    /// Velocity from the H and V pulses separately, in m/s.
    pub vel_hv: f64,
    /// Clutter phase alignment, 0 to 1.
    pub cpa: f64,
    /// Signal at this gate is dominated by noise.
    pub noise_flag: bool,

    /// The alternating mode velocity as it was before unfolding.
    pub vel_alt: f64,
    /// Nearest integer number of nyquist intervals separating `vel` and `vel_hv`.
    pub vel_alt_fold_interval: i32,
    /// Confidence in `vel_alt_fold_interval`, 0 to 1.
    pub vel_alt_fold_confidence: f64,
    /// Raw difference `vel - vel_hv`.
    pub vel_diff: f64,
    /// Fold interval used directly for unfolding, none where it had to be inferred.
    pub vel_unfold_interval: Optioned<i32>,

    /// Diagnostic slot, see `MomentField::Test2`.
    pub test2: Optioned<f64>,
    /// Diagnostic slot, see `MomentField::Test3`.
    pub test3: Optioned<f64>,
    /// Diagnostic slot, see `MomentField::Test4`.
    pub test4: Optioned<f64>,
    /// Diagnostic slot, see `MomentField::Test5`.
    pub test5: Optioned<f64>,
}

impl Default for MomentsFields {
    fn default() -> Self {
        MomentsFields {
            vel: 0.0,
            vel_hv: 0.0,
            cpa: 0.0,
            noise_flag: false,
            vel_alt: 0.0,
            vel_alt_fold_interval: 0,
            vel_alt_fold_confidence: 0.0,
            vel_diff: 0.0,
            vel_unfold_interval: none(),
            test2: none(),
            test3: none(),
            test4: none(),
            test5: none(),
        }
    }
}

impl MomentsFields {
    /// Create a record with the inputs needed for unfolding and empty diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::MomentsFields;
    ///
    /// let gate = MomentsFields::new(12.5, -3.0, 0.2, false);
    /// assert_eq!(gate.vel, 12.5);
    /// assert!(gate.vel_unfold_interval.is_none());
    /// ```
    #[inline]
    pub fn new(vel: f64, vel_hv: f64, cpa: f64, noise_flag: bool) -> Self {
        MomentsFields {
            vel,
            vel_hv,
            cpa,
            noise_flag,
            ..Self::default()
        }
    }

    /// Get a field by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::{MomentField, MomentsFields};
    ///
    /// let gate = MomentsFields::new(12.5, -3.0, 0.2, true);
    /// assert_eq!(gate.value(MomentField::VelHv).unwrap(), -3.0);
    /// assert_eq!(gate.value(MomentField::NoiseFlag).unwrap(), 1.0);
    /// assert!(gate.value(MomentField::Test5).is_none());
    /// ```
    pub fn value(&self, key: MomentField) -> Optioned<f64> {
        use self::MomentField::*;

        match key {
            Vel => some(self.vel),
            VelHv => some(self.vel_hv),
            Cpa => some(self.cpa),
            NoiseFlag => some(if self.noise_flag { 1.0 } else { 0.0 }),
            VelAlt => some(self.vel_alt),
            VelAltFoldInterval => some(f64::from(self.vel_alt_fold_interval)),
            VelAltFoldConfidence => some(self.vel_alt_fold_confidence),
            VelDiff => some(self.vel_diff),
            VelUnfoldInterval => self.vel_unfold_interval.map_t(f64::from),
            Test2 => self.test2,
            Test3 => self.test3,
            Test4 => self.test4,
            Test5 => self.test5,
        }
    }
}
