//! Kinked (jump rate) interest rate model.

use super::traits::{blocks_per_year, InterestRateModel};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piecewise-linear borrow rate model with a single kink.
///
/// Below the kink the borrow rate rises with `multiplier`; above it the
/// excess utilisation is charged at the steeper `jump_multiplier`.
/// All parameters are yearly rates; per-block rates are derived by dividing
/// by [`BLOCKS_PER_YEAR`](super::BLOCKS_PER_YEAR).
///
/// ```text
/// u <= kink (or kink == 0):  r(u) = base + u * mult
/// u >  kink:                 r(u) = base + kink * mult + (u - kink) * jump
/// ```
///
/// # Example
///
/// ```
/// use rate_model::model::{InterestRateModel, JumpRateModel};
///
/// let model = JumpRateModel::new(0.02_f64, 0.2, 0.5, 0.8);
///
/// // Base rate applies at zero utilisation
/// assert!((model.borrow_apy(0.0) - 0.02).abs() < 1e-12);
///
/// // 0.02 + 0.8 * 0.2 + 0.1 * 0.5
/// assert!((model.borrow_apy(0.9) - 0.23).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JumpRateModel<T: Float> {
    /// Yearly borrow rate at zero utilisation
    base_rate: T,
    /// Yearly slope below the kink
    multiplier: T,
    /// Yearly slope above the kink
    jump_multiplier: T,
    /// Utilisation at which the slope changes
    kink: T,
}

impl<T: Float> JumpRateModel<T> {
    /// Construct a model from yearly parameters.
    ///
    /// # Arguments
    ///
    /// * `base_rate` - Borrow rate at zero utilisation
    /// * `multiplier` - Slope below the kink
    /// * `jump_multiplier` - Slope above the kink
    /// * `kink` - Utilisation threshold; `0` disables the jump segment
    #[inline]
    pub fn new(base_rate: T, multiplier: T, jump_multiplier: T, kink: T) -> Self {
        Self {
            base_rate,
            multiplier,
            jump_multiplier,
            kink,
        }
    }

    /// Return the yearly base rate.
    #[inline]
    pub fn base_rate(&self) -> T {
        self.base_rate
    }

    /// Return the yearly multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }

    /// Return the yearly jump multiplier.
    #[inline]
    pub fn jump_multiplier(&self) -> T {
        self.jump_multiplier
    }

    /// Return the kink utilisation.
    #[inline]
    pub fn kink(&self) -> T {
        self.kink
    }

    #[inline]
    fn base_rate_per_block(&self) -> T {
        self.base_rate / blocks_per_year()
    }

    #[inline]
    fn multiplier_per_block(&self) -> T {
        self.multiplier / blocks_per_year()
    }

    #[inline]
    fn jump_multiplier_per_block(&self) -> T {
        self.jump_multiplier / blocks_per_year()
    }
}

impl<T: Float> InterestRateModel<T> for JumpRateModel<T> {
    fn borrow_rate_per_block(&self, u: T) -> T {
        if self.kink == T::zero() || u <= self.kink {
            return u * self.multiplier_per_block() + self.base_rate_per_block();
        }

        let normal_rate = self.kink * self.multiplier_per_block() + self.base_rate_per_block();
        let excess_util = u - self.kink;
        excess_util * self.jump_multiplier_per_block() + normal_rate
    }
}
