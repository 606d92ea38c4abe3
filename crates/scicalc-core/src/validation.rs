//! Argument guards shared by the formulas.
//!
//! Each guard either passes the value through or returns
//! [`CalcError::InvalidArgument`]. Rejections are reported as `debug`
//! events; accepted values are not logged.

use crate::{
    error::{CalcError, Result},
    types::Scalar,
};

/// Require `value >= 0`.
///
/// NaN is not less than zero and therefore passes, matching a plain
/// `value < 0` comparison.
pub fn ensure_non_negative<T: Scalar>(parameter: &str, value: T, reason: &str) -> Result<T> {
    if value < T::zero() {
        tracing::debug!(parameter, value = %value, "rejected negative argument");
        return Err(CalcError::invalid_argument(parameter, reason));
    }
    Ok(value)
}

/// Require `value != 0`.
pub fn ensure_non_zero<T: Scalar>(parameter: &str, value: T, reason: &str) -> Result<T> {
    if value == T::zero() {
        tracing::debug!(parameter, value = %value, "rejected zero argument");
        return Err(CalcError::invalid_argument(parameter, reason));
    }
    Ok(value)
}

/// Require a non-empty slice.
pub fn ensure_non_empty<'a, T>(parameter: &str, values: &'a [T], reason: &str) -> Result<&'a [T]> {
    if values.is_empty() {
        tracing::debug!(parameter, "rejected empty sequence");
        return Err(CalcError::invalid_argument(parameter, reason));
    }
    Ok(values)
}
