//! Population statistics.
//!
//! The standard deviation is computed in two passes over the data: one
//! for the mean, one for the sum of squared deviations. The divisor is
//! the population size `N` (not `N - 1`).
//!
//! All functions reject an empty population with
//! [`CalcError::InvalidArgument`](crate::CalcError::InvalidArgument)
//! rather than evaluating `0 / 0`.

use crate::{error::Result, types::Scalar, validation::ensure_non_empty};
use num_traits::Float;

const EMPTY_POPULATION: &str = "Population cannot be empty";

/// Arithmetic mean `μ = (1/N) Σ xᵢ`.
pub fn mean<T: Scalar>(population: &[T]) -> Result<T> {
    let population = ensure_non_empty("population", population, EMPTY_POPULATION)?;
    Ok(sum(population) / T::from_count(population.len()))
}

/// Population variance `σ² = (1/N) Σ (xᵢ - μ)²`.
pub fn population_variance<T: Scalar>(population: &[T]) -> Result<T> {
    let mu = mean(population)?;
    let squared_deviations = population.iter().fold(T::zero(), |acc, &x| {
        let d = x - mu;
        acc + d * d
    });
    Ok(squared_deviations / T::from_count(population.len()))
}

/// Population standard deviation `σ = √σ²`.
///
/// # Example
/// ```
/// use scicalc_core::stats::population_std_dev;
///
/// let sigma = population_std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sigma - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: Scalar>(population: &[T]) -> Result<T> {
    population_variance(population).map(Float::sqrt)
}

// Left-to-right accumulation, in slice order.
fn sum<T: Scalar>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc + x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use approx::assert_relative_eq;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_mean() {
        assert_eq!(mean(&SAMPLE).unwrap(), 5.0);
        assert_eq!(mean(&[-3.0]).unwrap(), -3.0);
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&SAMPLE).unwrap(), 4.0);
    }

    #[test]
    fn test_population_std_dev() {
        assert_relative_eq!(population_std_dev(&SAMPLE).unwrap(), 2.0);
    }

    #[test]
    fn test_divides_by_population_size() {
        // Sample std dev of [1, 3] would be √2; population std dev is 1
        assert_eq!(population_std_dev(&[1.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_constant_population() {
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(population_std_dev(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut reversed = SAMPLE;
        reversed.reverse();
        assert_relative_eq!(
            population_std_dev(&reversed).unwrap(),
            population_std_dev(&SAMPLE).unwrap()
        );
    }

    #[test]
    fn test_empty_population() {
        let empty: [f64; 0] = [];
        let expected = CalcError::invalid_argument("population", EMPTY_POPULATION);
        assert_eq!(mean(&empty).unwrap_err(), expected);
        assert_eq!(population_variance(&empty).unwrap_err(), expected);
        assert_eq!(population_std_dev(&empty).unwrap_err(), expected);
    }

    #[test]
    fn test_single_precision() {
        let data = [2.0_f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&data).unwrap(), 2.0_f32);
    }
}
