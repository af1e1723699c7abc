/// Wrap a velocity into `[-nyquist, nyquist)` by whole steps of `2 * nyquist`.
///
/// Runs in constant time for any positive nyquist. Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use alternating_velocity::utility::wrap_to_nyquist;
///
/// assert_eq!(wrap_to_nyquist(25.0, 20.0), -15.0);
/// assert_eq!(wrap_to_nyquist(20.0, 20.0), -20.0);
/// assert_eq!(wrap_to_nyquist(-20.0, 20.0), -20.0);
/// ```
pub fn wrap_to_nyquist(vel: f64, nyquist: f64) -> f64 {
    debug_assert!(nyquist > 0.0);

    if !vel.is_finite() {
        return vel;
    }

    let interval = 2.0 * nyquist;
    let vel = (vel + nyquist).rem_euclid(interval) - nyquist;

    // rem_euclid may round up to the full interval
    if vel >= nyquist {
        vel - interval
    } else {
        vel
    }
}

/// Shift a velocity by whole steps of `step` until it lies within `[min_vel, max_vel]`.
///
/// The window must be at least `step` wide for a solution to exist. The number of steps is computed
/// directly, so very large velocities or very small steps are handled in constant time. Non-finite
/// values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use alternating_velocity::utility::constrain_to_window;
///
/// assert_eq!(constrain_to_window(-8.0, 5.0, 25.0, 20.0), 12.0);
/// assert_eq!(constrain_to_window(7.0, -25.0, -5.0, 20.0), -13.0);
/// assert_eq!(constrain_to_window(6.0, 5.0, 25.0, 20.0), 6.0);
/// ```
pub fn constrain_to_window(vel: f64, min_vel: f64, max_vel: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0);
    debug_assert!(max_vel - min_vel >= step * (1.0 - 1.0e-9));

    if !vel.is_finite() {
        return vel;
    }

    let mut vel = vel;
    if vel < min_vel {
        vel += step * ((min_vel - vel) / step).ceil();
        if vel < min_vel {
            vel += step;
        }
    }
    if vel > max_vel {
        vel -= step * ((vel - max_vel) / step).ceil();
        if vel > max_vel {
            vel -= step;
        }
    }
    vel
}

/// Clamp a window of `len` items centered on `center` so it fits in `0..count`.
///
/// Returns the half open index range. When `count < len` the whole of `0..count` is returned.
pub(crate) fn centered_window(center: usize, len: usize, count: usize) -> std::ops::Range<usize> {
    if count <= len {
        return 0..count;
    }

    let start = center.saturating_sub(len / 2).min(count - len);
    start..(start + len)
}
