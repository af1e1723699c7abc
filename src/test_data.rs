//! Synthetic beams used in tests.
use crate::moments::MomentsFields;
use itertools::izip;

pub const NYQUIST: f64 = 20.0;

pub fn beam_from_columns(
    vel: &[f64],
    vel_hv: &[f64],
    cpa: &[f64],
    noise_flag: &[bool],
) -> Vec<MomentsFields> {
    assert_eq!(vel.len(), vel_hv.len());
    assert_eq!(vel.len(), cpa.len());
    assert_eq!(vel.len(), noise_flag.len());

    izip!(vel, vel_hv, cpa, noise_flag)
        .map(|(&vel, &vel_hv, &cpa, &noise)| MomentsFields::new(vel, vel_hv, cpa, noise))
        .collect()
}

/// Clutter free gates everywhere, with H/V velocities outside the nyquist at both ends.
pub fn confident_beam() -> Vec<MomentsFields> {
    (0..15)
        .map(|i| {
            let i = i as f64;
            MomentsFields::new(17.0 - 2.3 * i, -25.0 + 3.5 * i, 0.9, false)
        })
        .collect()
}

/// Every gate is noise.
pub fn noise_beam() -> Vec<MomentsFields> {
    (0..20)
        .map(|i| {
            let i = i as f64;
            MomentsFields::new(3.0 + 0.5 * i, -6.0 + i, 0.2, true)
        })
        .collect()
}

/// Gates 5 through 9 are ambiguous, surrounded by gates folded once into the upper interval.
pub fn upper_fold_gap_beam() -> Vec<MomentsFields> {
    (0..15)
        .map(|i| {
            if (5..10).contains(&i) {
                MomentsFields::new(5.0, -8.0, 0.1, false)
            } else {
                MomentsFields::new(8.4, -12.0, 0.1, false)
            }
        })
        .collect()
}

/// Gates 5 through 9 are ambiguous with negative velocities, the gates around them positive.
pub fn half_fold_gap_beam() -> Vec<MomentsFields> {
    (0..15)
        .map(|i| {
            if (5..10).contains(&i) {
                MomentsFields::new(-2.0, -8.0, 0.1, false)
            } else {
                MomentsFields::new(8.4, 8.0, 0.9, false)
            }
        })
        .collect()
}

/// Alternating mode velocity oscillating between near zero and near the nyquist.
pub fn clutter_beam() -> Vec<MomentsFields> {
    (0..20)
        .map(|i| {
            let vel = if i % 2 == 0 { 0.2 } else { 19.5 };
            MomentsFields::new(vel, 0.1, 0.9, false)
        })
        .collect()
}
