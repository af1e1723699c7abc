//! Error types for the alternating-velocity crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Debug, Error)]
pub enum UnfoldError {
    /// The nyquist velocity must be finite and positive.
    #[error("Invalid nyquist velocity: {0}")]
    InvalidNyquist(f64),
    /// The beam has no nyquist velocity set.
    #[error("Missing nyquist velocity required for unfolding.")]
    MissingNyquist,
    /// A tuning parameter is out of range.
    #[error("Invalid unfolding configuration: {0}")]
    InvalidConfig(&'static str),
    /// The filtered and unfiltered moments of a beam do not cover the same gates.
    #[error("Filtered moments have {filtered} gates, unfiltered have {unfiltered}.")]
    MismatchedGateCount {
        /// Number of gates in the unfiltered moments.
        unfiltered: usize,
        /// Number of gates in the clutter filtered moments.
        filtered: usize,
    },
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, UnfoldError>;
