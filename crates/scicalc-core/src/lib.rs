//! Core formulas for scientific calculations.
//!
//! This crate provides a small set of pure, stateless numeric functions.
//! Each one validates its domain up front, then evaluates a closed-form
//! expression. No function holds state, so all of them are safe to call
//! concurrently.
//!
//! # Modules
//!
//! - [`algebra`]: Quadratic equation roots and discriminant
//! - [`error`]: Error type for out-of-domain arguments
//! - [`geometry`]: Circle area
//! - [`stats`]: Population mean, variance and standard deviation
//! - [`types`]: Numeric scalar trait and result aliases
//! - [`validation`]: Argument guards
//!
//! # Example
//! ```
//! use scicalc_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let area = circle_area(1.0_f64)?;
//! let (x1, x2) = solve_quadratic(1.0, 0.0, -4.0)?;
//! let sigma = population_std_dev(&[5.0, 5.0, 5.0, 5.0])?;
//!
//! assert_eq!(area, std::f64::consts::PI);
//! assert_eq!((x1, x2), (2.0, -2.0));
//! assert_eq!(sigma, 0.0);
//! # Ok(())
//! # }
//! ```

pub mod algebra;
pub mod error;
pub mod geometry;
pub mod stats;
pub mod types;
pub mod validation;

// Re-export commonly used items at the crate root
pub use error::{CalcError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scicalc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{discriminant, has_real_roots, solve_quadratic};
    pub use crate::error::{CalcError, Result};
    pub use crate::geometry::circle_area;
    pub use crate::stats::{mean, population_std_dev, population_variance};
    pub use crate::types::{RootPair, Scalar};
}
