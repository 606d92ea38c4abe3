//! Scientific calculation utilities.
//!
//! This crate re-exports [`scicalc_core`] and adds [`ScientificCalc`], a
//! stateless handle bundling the three calculations behind one value.
//!
//! | Calculation | Formula | Fails when |
//! |---|---|---|
//! | [`circle_area`](prelude::circle_area) | `π r²` | `r < 0` |
//! | [`solve_quadratic`](prelude::solve_quadratic) | `(-b ± √(b² - 4ac)) / 2a` | `a == 0` |
//! | [`population_std_dev`](prelude::population_std_dev) | `√((1/N) Σ (xᵢ - μ)²)` | empty input |
//!
//! A quadratic with a negative discriminant succeeds and yields
//! `(NaN, NaN)`.
//!
//! # Example
//! ```
//! use scicalc::ScientificCalc;
//!
//! let calc = ScientificCalc::new();
//! assert_eq!(calc.solve_quadratic(1.0, 2.0, 1.0).unwrap(), (-1.0, -1.0));
//! ```

pub use scicalc_core::{algebra, error, geometry, stats, types, validation};
pub use scicalc_core::{CalcError, Result};

use scicalc_core::types::{RootPair, Scalar};

/// Stateless entry point to the calculations.
///
/// Holds no data; every method delegates to the free function of the same
/// purpose, so copies are interchangeable and may be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScientificCalc;

impl ScientificCalc {
    /// Create a new handle.
    pub const fn new() -> Self {
        Self
    }

    /// Area of a circle of the given radius. See [`geometry::circle_area`].
    pub fn calculate_circle_area<T: Scalar>(&self, radius: T) -> Result<T> {
        geometry::circle_area(radius)
    }

    /// Real roots of `ax² + bx + c = 0`. See [`algebra::solve_quadratic`].
    pub fn solve_quadratic<T: Scalar>(&self, a: T, b: T, c: T) -> Result<RootPair<T>> {
        algebra::solve_quadratic(a, b, c)
    }

    /// Population standard deviation. See [`stats::population_std_dev`].
    pub fn calculate_standard_deviation<T: Scalar>(&self, population: &[T]) -> Result<T> {
        stats::population_std_dev(population)
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ScientificCalc;
    pub use scicalc_core::prelude::*;
}
