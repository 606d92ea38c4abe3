//! Type definitions and aliases for scientific calculations.
//!
//! This module provides the numeric trait shared by every formula and
//! the result shape of the quadratic solver.

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Trait for scalar types accepted by the formulas (f32 or f64).
///
/// `f64` is the reference precision; `f32` is supported for callers that
/// already work in single precision.
pub trait Scalar: Float + FloatConst + Display + Debug + Default + Send + Sync + 'static {
    /// Convert an element count to this scalar type.
    fn from_count(n: usize) -> Self;

    /// The constant 2.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant 4.
    fn four() -> Self {
        Self::two() * Self::two()
    }
}

impl Scalar for f32 {
    #[allow(clippy::cast_precision_loss)]
    fn from_count(n: usize) -> Self {
        n as Self
    }
}

impl Scalar for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_count(n: usize) -> Self {
        n as Self
    }
}

/// The two roots of a quadratic equation.
///
/// Ordered as `(+√Δ root, −√Δ root)`. A double root appears twice and
/// both entries are NaN when the equation has no real roots.
pub type RootPair<T> = (T, T);
