//! Polynomial root finding.
//!
//! The quadratic solver uses the textbook formula
//! `x = (-b ± √(b² - 4ac)) / 2a` as is, with no rearrangement against
//! cancellation when `|b|` dominates `4ac`.
//!
//! # No real roots
//!
//! A negative discriminant is not an error. [`solve_quadratic`] returns
//! `(NaN, NaN)` in that case so callers can branch with
//! [`has_real_roots`] instead of handling a failure.

use crate::{
    error::Result,
    types::{RootPair, Scalar},
    validation::ensure_non_zero,
};

/// Discriminant `Δ = b² - 4ac` of `ax² + bx + c`.
pub fn discriminant<T: Scalar>(a: T, b: T, c: T) -> T {
    b * b - T::four() * a * c
}

/// Solve `ax² + bx + c = 0` over the reals.
///
/// Returns `((-b + √Δ) / 2a, (-b - √Δ) / 2a)` in that order. When `Δ = 0`
/// both entries hold the same root. When `Δ < 0` both entries are NaN.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`](crate::CalcError::InvalidArgument)
/// when `a == 0`, since the equation is then not quadratic.
///
/// # Example
/// ```
/// use scicalc_core::algebra::solve_quadratic;
///
/// assert_eq!(solve_quadratic(1.0, 0.0, -4.0).unwrap(), (2.0, -2.0));
///
/// let (x1, x2) = solve_quadratic(1.0_f64, 0.0, 1.0).unwrap();
/// assert!(x1.is_nan() && x2.is_nan());
/// ```
pub fn solve_quadratic<T: Scalar>(a: T, b: T, c: T) -> Result<RootPair<T>> {
    let a = ensure_non_zero("a", a, "Coefficient 'a' cannot be zero")?;

    let delta = discriminant(a, b, c);
    if delta < T::zero() {
        return Ok((T::nan(), T::nan()));
    }

    let sqrt_delta = delta.sqrt();
    let two_a = T::two() * a;
    Ok(((-b + sqrt_delta) / two_a, (-b - sqrt_delta) / two_a))
}

/// Whether a root pair returned by [`solve_quadratic`] holds real roots.
pub fn has_real_roots<T: Scalar>(roots: &RootPair<T>) -> bool {
    !(roots.0.is_nan() || roots.1.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, 0.0, -4.0), 16.0);
        assert_eq!(discriminant(1.0, 2.0, 1.0), 0.0);
        assert_eq!(discriminant(1.0, 0.0, 1.0), -4.0);
    }

    #[test]
    fn test_distinct_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, -4.0).unwrap(), (2.0, -2.0));
        assert_eq!(solve_quadratic(1.0, -3.0, 2.0).unwrap(), (2.0, 1.0));
    }

    #[test]
    fn test_plus_root_first_for_negative_leading_coefficient() {
        // -x² + 4 = 0: dividing by 2a = -2 flips the sign of the "+" root
        assert_eq!(solve_quadratic(-1.0, 0.0, 4.0).unwrap(), (-2.0, 2.0));
    }

    #[test]
    fn test_double_root() {
        let roots = solve_quadratic(1.0, 2.0, 1.0).unwrap();
        assert_eq!(roots, (-1.0, -1.0));
        assert!(has_real_roots(&roots));
    }

    #[test]
    fn test_no_real_roots() {
        let roots = solve_quadratic(1.0_f64, 0.0, 1.0).unwrap();
        assert!(roots.0.is_nan());
        assert!(roots.1.is_nan());
        assert!(!has_real_roots(&roots));
    }

    #[test]
    fn test_zero_leading_coefficient() {
        assert_eq!(
            solve_quadratic(0.0, 1.0, 1.0).unwrap_err(),
            CalcError::invalid_argument("a", "Coefficient 'a' cannot be zero")
        );
    }

    #[test]
    fn test_non_monic() {
        // 2x² - 4x - 6 = 2(x - 3)(x + 1)
        let (x1, x2) = solve_quadratic(2.0, -4.0, -6.0).unwrap();
        assert_relative_eq!(x1, 3.0);
        assert_relative_eq!(x2, -1.0);
    }

    #[test]
    fn test_single_precision() {
        assert_eq!(solve_quadratic(1.0_f32, 0.0, -9.0).unwrap(), (3.0, -3.0));
    }
}
