#![warn(missing_docs)]
//! Unfolding of the alternating mode Doppler velocity measured by dual polarization radars that
//! transmit alternating H and V pulses.
//!
//! The moments computation supplies, for each gate along a beam, the alternating mode velocity,
//! the velocity from the H and V co-polar pulses, the clutter phase alignment and a noise flag.
//! This crate reconciles the two velocity estimates into a single de-aliased velocity and fills
//! in diagnostic fields describing the fold at each gate.
//!
//! # Examples
//!
//! ```rust
//! use alternating_velocity::{compute_vel_alt, MomentField, MomentsFields};
//!
//! let nyquist = 25.0;
//! let mut fields: Vec<MomentsFields> = (0..20)
//!     .map(|i| MomentsFields::new(-20.0 + i as f64, 3.0 + 0.5 * i as f64, 0.2, i > 15))
//!     .collect();
//!
//! let summary = compute_vel_alt(&mut fields, nyquist).unwrap();
//! assert_eq!(summary.num_gates, 20);
//! assert_eq!(summary.num_noise, 4);
//!
//! for gate in &fields {
//!     assert!(gate.vel.abs() <= nyquist);
//!     assert!(gate.value(MomentField::VelAltFoldConfidence).is_some());
//! }
//! ```

//
// API
//
pub use crate::{
    beam::{Beam, BeamSummary},
    config::UnfoldConfig,
    error::{Result, UnfoldError},
    keys::MomentField,
    moments::MomentsFields,
    unfold::{compute_vel_alt, AltVelUnfolder, GateRun, UnfoldSummary},
};

/// Helpers for wrapping velocities between nyquist intervals.
pub mod utility;

//
// Internal use only
//

// Modules
mod beam;
mod config;
mod error;
mod keys;
mod moments;
mod unfold;

#[cfg(test)]
mod test_data;
