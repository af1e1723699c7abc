//! Tuning constants for the alternating velocity unfolding.
use crate::error::{Result, UnfoldError::InvalidConfig};

/// Thresholds and window sizes used by the unfolding.
///
/// The defaults are calibrated for alternating mode moments and should rarely need changing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnfoldConfig {
    /// Number of gates in the kernel used to detect the clutter 0/nyquist oscillation.
    pub clutter_kernel_len: usize,
    /// A velocity within this fraction of the nyquist of zero is flagged as near zero.
    pub vel_zero_frac: f64,
    /// A velocity beyond this fraction of the nyquist is flagged as near the nyquist.
    pub vel_nyquist_frac: f64,
    /// Both the zero and nyquist fractions of a kernel must exceed this for the clutter fix.
    pub clutter_fix_min_frac: f64,
    /// Gates with clutter phase alignment above this are not folded.
    pub cpa_no_fold_threshold: f64,
    /// Fold confidence needed to trust a gate's fold interval.
    pub min_fold_confidence: f64,
    /// Vote totals below this count as no vote when inferring a gap's fold interval.
    pub negligible_vote: f64,
    /// Gates on each side of a gap examined by the secondary fold correction.
    pub fold_context_len: usize,
    /// Majority of one sign over the other needed outside a gap for the secondary fold correction.
    pub fold_majority_ratio: f64,
    /// Band of |vel| / nyquist, exclusive, where a secondary fold can be recognized.
    pub fold_band: (f64, f64),
    /// Fraction of the nyquist the center of a gap's velocity window moves toward the
    /// upper or lower interval.
    pub interval_shift_frac: f64,
}

impl Default for UnfoldConfig {
    fn default() -> Self {
        UnfoldConfig {
            clutter_kernel_len: 11,
            vel_zero_frac: 0.05,
            vel_nyquist_frac: 0.95,
            clutter_fix_min_frac: 0.075,
            cpa_no_fold_threshold: 0.5,
            min_fold_confidence: 0.8,
            negligible_vote: 0.1,
            fold_context_len: 10,
            fold_majority_ratio: 3.0,
            fold_band: (0.25, 0.75),
            interval_shift_frac: 0.75,
        }
    }
}

impl UnfoldConfig {
    /// Check that the values are usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::UnfoldConfig;
    ///
    /// assert!(UnfoldConfig::default().validate().is_ok());
    ///
    /// let bad = UnfoldConfig { clutter_kernel_len: 0, ..UnfoldConfig::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let is_frac = |val: f64| (0.0..=1.0).contains(&val);

        if self.clutter_kernel_len == 0 {
            return Err(InvalidConfig("clutter kernel must have at least one gate"));
        }
        if !is_frac(self.vel_zero_frac) || !is_frac(self.vel_nyquist_frac) {
            return Err(InvalidConfig("zero and nyquist fractions must be in [0, 1]"));
        }
        if self.vel_zero_frac >= self.vel_nyquist_frac {
            return Err(InvalidConfig("zero fraction must be below the nyquist fraction"));
        }
        if !is_frac(self.clutter_fix_min_frac)
            || !is_frac(self.cpa_no_fold_threshold)
            || !is_frac(self.min_fold_confidence)
        {
            return Err(InvalidConfig("fraction thresholds must be in [0, 1]"));
        }
        if !(self.negligible_vote > 0.0) {
            return Err(InvalidConfig("negligible vote must be positive"));
        }
        if !(self.fold_majority_ratio >= 1.0) {
            return Err(InvalidConfig("fold majority ratio must be at least 1"));
        }
        let (band_low, band_high) = self.fold_band;
        if !is_frac(band_low) || !is_frac(band_high) || band_low >= band_high {
            return Err(InvalidConfig("fold band must be an ordered range in [0, 1]"));
        }
        if !is_frac(self.interval_shift_frac) {
            return Err(InvalidConfig("interval shift must be in [0, 1]"));
        }

        Ok(())
    }
}
