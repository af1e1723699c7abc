//! Data type for a single radar beam (ray) of moments.

use crate::{
    error::{Result, UnfoldError},
    keys::MomentField,
    moments::MomentsFields,
    unfold::{AltVelUnfolder, UnfoldSummary},
};
use chrono::NaiveDateTime;
use metfor::{MetersPSec, Quantity};
use optional::Optioned;

/// The moments along one beam, with the beam's pointing and timing.
///
/// When clutter filtering was applied there is a second, filtered, set of moments parallel to the
/// unfiltered ones. If no filtering was done that vector is empty.
#[derive(Clone, Debug, Default)]
pub struct Beam {
    // Time of the center of the dwell
    time: Option<NaiveDateTime>,

    // Pointing, in degrees
    azimuth: Optioned<f64>,
    elevation: Optioned<f64>,

    nyquist: Optioned<MetersPSec>,

    // Moments
    fields: Vec<MomentsFields>,
    fields_filtered: Vec<MomentsFields>,
}

/// What unfolding did to each set of moments in a beam.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamSummary {
    /// Summary for the unfiltered moments.
    pub unfiltered: UnfoldSummary,
    /// Summary for the clutter filtered moments, if the beam has them.
    pub filtered: Option<UnfoldSummary>,
}

impl Beam {
    /// Create a new, empty, beam.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::Beam;
    ///
    /// let beam = Beam::new();
    /// assert_eq!(beam.num_gates(), 0);
    /// assert!(beam.nyquist().is_none());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Beam::default()
    }

    /// Builder method for the valid time.
    #[inline]
    pub fn with_time<T>(mut self, time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.time = Option::from(time);
        self
    }

    /// Get the valid time.
    #[inline]
    pub fn time(&self) -> Option<NaiveDateTime> {
        self.time
    }

    /// Builder method for the azimuth in degrees.
    #[inline]
    pub fn with_azimuth<T>(mut self, azimuth: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.azimuth = Optioned::from(azimuth);
        self
    }

    /// Get the azimuth in degrees.
    #[inline]
    pub fn azimuth(&self) -> Optioned<f64> {
        self.azimuth
    }

    /// Builder method for the elevation in degrees.
    #[inline]
    pub fn with_elevation<T>(mut self, elevation: T) -> Self
    where
        Optioned<f64>: From<T>,
    {
        self.elevation = Optioned::from(elevation);
        self
    }

    /// Get the elevation in degrees.
    #[inline]
    pub fn elevation(&self) -> Optioned<f64> {
        self.elevation
    }

    /// Builder method for the nyquist velocity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::Beam;
    /// use metfor::MetersPSec;
    ///
    /// let beam = Beam::new().with_nyquist(MetersPSec(26.5));
    /// assert_eq!(beam.nyquist().unwrap(), MetersPSec(26.5));
    /// ```
    #[inline]
    pub fn with_nyquist<T>(mut self, nyquist: T) -> Self
    where
        Optioned<MetersPSec>: From<T>,
    {
        self.nyquist = Optioned::from(nyquist);
        self
    }

    /// Get the nyquist velocity.
    #[inline]
    pub fn nyquist(&self) -> Optioned<MetersPSec> {
        self.nyquist
    }

    /// Builder method for the unfiltered moments.
    #[inline]
    pub fn with_fields(self, fields: Vec<MomentsFields>) -> Self {
        Beam { fields, ..self }
    }

    /// Builder method for the clutter filtered moments.
    #[inline]
    pub fn with_filtered_fields(self, fields_filtered: Vec<MomentsFields>) -> Self {
        Beam {
            fields_filtered,
            ..self
        }
    }

    /// Get the unfiltered moments.
    #[inline]
    pub fn fields(&self) -> &[MomentsFields] {
        &self.fields
    }

    /// Get the clutter filtered moments, empty if the beam was not filtered.
    #[inline]
    pub fn filtered_fields(&self) -> &[MomentsFields] {
        &self.fields_filtered
    }

    /// Number of gates in the beam.
    #[inline]
    pub fn num_gates(&self) -> usize {
        self.fields.len()
    }

    /// Get one field along the unfiltered beam.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alternating_velocity::{Beam, MomentField, MomentsFields};
    ///
    /// let beam = Beam::new().with_fields(vec![
    ///     MomentsFields::new(1.0, 2.0, 0.3, false),
    ///     MomentsFields::new(4.0, 5.0, 0.6, false),
    /// ]);
    ///
    /// let cpa: Vec<f64> = beam
    ///     .field_profile(MomentField::Cpa)
    ///     .into_iter()
    ///     .map(|val| val.unpack())
    ///     .collect();
    /// assert_eq!(cpa, vec![0.3, 0.6]);
    /// ```
    pub fn field_profile(&self, key: MomentField) -> Vec<Optioned<f64>> {
        self.fields.iter().map(|gate| gate.value(key)).collect()
    }

    /// Get one field along the clutter filtered beam, empty if the beam was not filtered.
    pub fn filtered_field_profile(&self, key: MomentField) -> Vec<Optioned<f64>> {
        self.fields_filtered
            .iter()
            .map(|gate| gate.value(key))
            .collect()
    }

    /// Unfold the alternating mode velocity of the unfiltered and, if present, the filtered
    /// moments.
    ///
    /// Nothing is modified if the nyquist is missing or invalid, or if the filtered moments do
    /// not have the same number of gates as the unfiltered ones.
    pub fn unfold_alt_velocity(&mut self, unfolder: &AltVelUnfolder) -> Result<BeamSummary> {
        let nyquist = self
            .nyquist
            .into_option()
            .ok_or(UnfoldError::MissingNyquist)?
            .unpack();

        if !self.fields_filtered.is_empty() && self.fields_filtered.len() != self.fields.len() {
            return Err(UnfoldError::MismatchedGateCount {
                unfiltered: self.fields.len(),
                filtered: self.fields_filtered.len(),
            });
        }

        let unfiltered = unfolder.compute_vel_alt(&mut self.fields, nyquist)?;
        let filtered = if self.fields_filtered.is_empty() {
            None
        } else {
            Some(unfolder.compute_vel_alt(&mut self.fields_filtered, nyquist)?)
        };

        Ok(BeamSummary {
            unfiltered,
            filtered,
        })
    }
}
