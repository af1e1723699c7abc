//! Removal of the clutter induced oscillation between 0 and the nyquist.
//!
//! Over strong clutter the alternating mode velocity flips between values near zero and values
//! near +/- the nyquist. Where both show up in the same neighborhood, the values near the nyquist
//! are moved back next to zero before the fold intervals are computed.
use super::CompFields;
use crate::{config::UnfoldConfig, moments::MomentsFields, utility::centered_window};
use itertools::izip;
use optional::some;

/// Returns the number of gates whose velocity was shifted.
pub(super) fn fix_alt_mode_vel(
    fields: &mut [MomentsFields],
    comp: &mut [CompFields],
    nyquist: f64,
    config: &UnfoldConfig,
) -> usize {
    debug_assert_eq!(fields.len(), comp.len());

    let n_gates = fields.len();
    let kernel_len = config.clutter_kernel_len;
    if n_gates < kernel_len {
        return 0;
    }

    for (gate, cf) in izip!(fields.iter(), comp.iter_mut()) {
        let frac = (gate.vel / nyquist).abs();
        cf.vel_zero = frac < config.vel_zero_frac;
        cf.vel_nyquist = frac > config.vel_nyquist_frac;
    }

    for i in 0..n_gates {
        let (num_zero, num_nyquist) = comp[centered_window(i, kernel_len, n_gates)]
            .iter()
            .fold((0usize, 0usize), |(num_zero, num_nyquist), cf| {
                (
                    num_zero + cf.vel_zero as usize,
                    num_nyquist + cf.vel_nyquist as usize,
                )
            });

        let frac_zero = num_zero as f64 / kernel_len as f64;
        let frac_nyquist = num_nyquist as f64 / kernel_len as f64;

        let cf = &mut comp[i];
        cf.frac_zero = some(frac_zero);
        cf.frac_nyquist = some(frac_nyquist);
        cf.fix_flag =
            frac_zero > config.clutter_fix_min_frac && frac_nyquist > config.clutter_fix_min_frac;
    }

    let mut num_fixed = 0;
    for (gate, cf) in izip!(fields.iter_mut(), comp.iter()) {
        if cf.fix_flag && cf.vel_nyquist {
            if gate.vel > 0.0 {
                gate.vel -= nyquist;
            } else {
                gate.vel += nyquist;
            }
            num_fixed += 1;
        }
    }

    num_fixed
}
