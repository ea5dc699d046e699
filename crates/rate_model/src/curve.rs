//! Borrow and supply rate curves over the utilisation domain.

use crate::model::InterestRateModel;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`.
///
/// # Example
///
/// ```
/// use rate_model::linspace;
///
/// let xs = linspace(0.0_f64, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let step = (end - start) / T::from(last).unwrap_or_else(T::one);
            (0..n)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        T::from(i).unwrap_or_else(T::zero) * step + start
                    }
                })
                .collect()
        }
    }
}

/// One sample of a rate curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RatePoint<T: Float> {
    /// Utilisation in percent (0 to 100)
    pub utilization_pct: T,
    /// Annualised borrow rate as a fraction
    pub borrow_apy: T,
    /// Annualised supply rate as a fraction
    pub supply_apy: T,
}

/// Borrow and supply APY sampled across utilisation, in increasing order.
///
/// # Example
///
/// ```
/// use rate_model::{JumpRateModel, RateCurve};
///
/// let model = JumpRateModel::new(0.0_f64, 0.058, 1.476, 0.8);
/// let curve = RateCurve::sweep(&model, 0.15, 100);
///
/// assert_eq!(curve.len(), 100);
/// assert_eq!(curve.utilizations()[0], 0.0);
/// assert_eq!(curve.utilizations()[99], 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateCurve<T: Float> {
    points: Vec<RatePoint<T>>,
}

impl<T: Float> RateCurve<T> {
    /// Evaluate `model` at `samples` utilisations spanning 0% to 100%.
    pub fn sweep<M: InterestRateModel<T>>(model: &M, reserve_factor: T, samples: usize) -> Self {
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        let points = linspace(T::zero(), hundred, samples)
            .into_iter()
            .map(|pct| {
                let u = pct / hundred;
                RatePoint {
                    utilization_pct: pct,
                    borrow_apy: model.borrow_apy(u),
                    supply_apy: model.supply_apy(u, reserve_factor),
                }
            })
            .collect();

        Self { points }
    }

    /// Sampled points in increasing utilisation order.
    pub fn points(&self) -> &[RatePoint<T>] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Utilisation percentages.
    pub fn utilizations(&self) -> Vec<T> {
        self.points.iter().map(|p| p.utilization_pct).collect()
    }

    /// Borrow APY as fractions.
    pub fn borrow_rates(&self) -> Vec<T> {
        self.points.iter().map(|p| p.borrow_apy).collect()
    }

    /// Supply APY as fractions.
    pub fn supply_rates(&self) -> Vec<T> {
        self.points.iter().map(|p| p.supply_apy).collect()
    }

    /// `(utilisation %, borrow rate %)` pairs for charting.
    pub fn borrow_series(&self) -> Vec<(T, T)> {
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        self.points
            .iter()
            .map(|p| (p.utilization_pct, p.borrow_apy * hundred))
            .collect()
    }

    /// `(utilisation %, supply rate %)` pairs for charting.
    pub fn supply_series(&self) -> Vec<(T, T)> {
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        self.points
            .iter()
            .map(|p| (p.utilization_pct, p.supply_apy * hundred))
            .collect()
    }

    /// Rate axis bounds in percent, from zero to 10% above the highest rate.
    pub fn y_bounds(&self) -> [T; 2] {
        let hundred = T::from(100.0).unwrap_or_else(T::one);
        let margin = T::from(1.1).unwrap_or_else(T::one);
        let max = self
            .points
            .iter()
            .map(|p| p.borrow_apy.max(p.supply_apy))
            .fold(T::zero(), T::max);
        let top = if max > T::zero() { max * hundred * margin } else { T::one() };
        [T::zero(), top]
    }
}
