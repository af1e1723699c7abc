//! Enums used as keys for selecting fields from the moments of a beam.
use strum_macros::EnumIter;

/// The per-gate moment fields read or written by the alternating velocity unfolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MomentField {
    /// Velocity (m/s). The alternating mode estimate on input, the unfolded velocity on output.
    Vel,
    /// Velocity (m/s) computed from the lag-2 H and V co-polar pulses.
    VelHv,
    /// Clutter phase alignment, 0 to 1.
    Cpa,
    /// 1.0 for noise dominated gates, 0.0 otherwise.
    NoiseFlag,
    /// The alternating mode velocity (m/s) as it was before unfolding.
    VelAlt,
    /// Nearest integer number of nyquist intervals between `Vel` and `VelHv`.
    VelAltFoldInterval,
    /// How close the fold interval is to an integer, 0 to 1.
    VelAltFoldConfidence,
    /// Raw difference `Vel - VelHv` (m/s).
    VelDiff,
    /// The fold interval trusted for unfolding, missing where it was inferred.
    VelUnfoldInterval,
    /// Fraction of the clutter kernel with velocity near zero.
    Test2,
    /// Fraction of the clutter kernel with velocity near the nyquist.
    Test3,
    /// Mean fold confidence of the gap containing the gate.
    Test4,
    /// Velocity after the secondary fold correction, where it was applied.
    Test5,
}
