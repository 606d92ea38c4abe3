//! Error types for scientific calculations.
//!
//! Only out-of-domain arguments are reported as errors. Numeric outcomes
//! such as "no real roots" are part of the success path and are signalled
//! with NaN instead (see [`crate::algebra::solve_quadratic`]).

use thiserror::Error;

/// Errors that can occur when evaluating a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalcError {
    /// An argument lies outside the domain of the formula.
    ///
    /// Raised before any computation takes place, e.g. for a negative
    /// radius or a zero leading coefficient.
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: String,
        /// Description of why the value was rejected
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidArgument error for a named parameter.
    pub fn invalid_argument<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the error.
    pub fn parameter(&self) -> &str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

/// Result type alias for fallible calculations.
pub type Result<T> = std::result::Result<T, CalcError>;
