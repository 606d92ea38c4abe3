//! Plane geometry formulas.

use crate::{error::Result, types::Scalar, validation::ensure_non_negative};

/// Area of a circle, `A = π r²`.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`](crate::CalcError::InvalidArgument)
/// when `radius < 0`.
///
/// # Example
/// ```
/// use scicalc_core::geometry::circle_area;
///
/// let area = circle_area(2.0_f64).unwrap();
/// assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-12);
/// assert!(circle_area(-1.0_f64).is_err());
/// ```
pub fn circle_area<T: Scalar>(radius: T) -> Result<T> {
    let radius = ensure_non_negative("radius", radius, "Radius cannot be negative")?;
    Ok(T::PI() * radius * radius)
}
