//! Pool balance helpers: utilisation, exchange rate and interest accrual.
//!
//! These mirror how a lending market turns its balances into the inputs of
//! an [`InterestRateModel`].

use crate::curve::RateCurve;
use crate::error::RateModelError;
use crate::model::{InterestRateModel, JumpRateModel};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Utilisation of a pool: `borrows / (cash + borrows - reserves)`.
///
/// # Errors
///
/// Returns [`RateModelError::ZeroLiquidity`] when the denominator is zero.
///
/// # Example
///
/// ```
/// use rate_model::market::utilization_rate;
///
/// let u = utilization_rate(20.0_f64, 80.0, 0.0).unwrap();
/// assert!((u - 0.8).abs() < 1e-12);
/// ```
pub fn utilization_rate<T: Float>(cash: T, borrows: T, reserves: T) -> Result<T, RateModelError> {
    let liquidity = cash + borrows - reserves;
    if liquidity == T::zero() {
        return Err(RateModelError::ZeroLiquidity {
            cash: cash.to_f64().unwrap_or(0.0),
            borrows: borrows.to_f64().unwrap_or(0.0),
            reserves: reserves.to_f64().unwrap_or(0.0),
        });
    }
    Ok(borrows / liquidity)
}

/// Pool value per unit of supply token.
///
/// Falls back to `initial` while nothing has been supplied.
pub fn exchange_rate<T: Float>(cash: T, borrows: T, reserves: T, supply: T, initial: T) -> T {
    if supply == T::zero() {
        return initial;
    }
    (cash + borrows - reserves) / supply
}

/// Portion of accumulated interest withheld as reserves.
#[inline]
pub fn new_reserves<T: Float>(interest_accumulated: T, reserve_factor: T) -> T {
    interest_accumulated * reserve_factor
}

/// Rate model together with the reserve factor of the market using it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketParams<T: Float> {
    /// Borrow rate model
    pub model: JumpRateModel<T>,
    /// Fraction of borrow interest retained by the pool
    pub reserve_factor: T,
}

impl<T: Float> MarketParams<T> {
    /// Construct market parameters from the five yearly model inputs.
    pub fn new(base_rate: T, multiplier: T, jump_multiplier: T, kink: T, reserve_factor: T) -> Self {
        Self {
            model: JumpRateModel::new(base_rate, multiplier, jump_multiplier, kink),
            reserve_factor,
        }
    }

    /// Annualised borrow rate at utilisation `u`.
    #[inline]
    pub fn borrow_apy(&self, u: T) -> T {
        self.model.borrow_apy(u)
    }

    /// Annualised supply rate at utilisation `u`.
    #[inline]
    pub fn supply_apy(&self, u: T) -> T {
        self.model.supply_apy(u, self.reserve_factor)
    }

    /// Sweep utilisation from 0% to 100% in `samples` points.
    pub fn curve(&self, samples: usize) -> RateCurve<T> {
        RateCurve::sweep(&self.model, self.reserve_factor, samples)
    }
}

/// Balances of a single lending market at a given block.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketSnapshot<T: Float> {
    /// Cash available in the pool
    pub cash: T,
    /// Outstanding borrows including accrued interest
    pub borrows: T,
    /// Reserves withheld by the pool
    pub reserves: T,
    /// Supply tokens in circulation
    pub supply: T,
    /// Cumulative borrow interest multiplier
    pub borrow_index: T,
    /// Block at which interest was last accrued
    pub block_number: u64,
}

impl<T: Float> MarketSnapshot<T> {
    /// Construct a snapshot with a unit borrow index.
    pub fn new(cash: T, borrows: T, reserves: T, supply: T, block_number: u64) -> Self {
        Self {
            cash,
            borrows,
            reserves,
            supply,
            borrow_index: T::one(),
            block_number,
        }
    }

    /// Current utilisation of the market.
    pub fn utilization_rate(&self) -> Result<T, RateModelError> {
        utilization_rate(self.cash, self.borrows, self.reserves)
    }

    /// Current exchange rate, or `initial` before the first supply.
    pub fn exchange_rate(&self, initial: T) -> T {
        exchange_rate(self.cash, self.borrows, self.reserves, self.supply, initial)
    }

    /// Current borrow APY under `params`.
    pub fn borrow_apy(&self, params: &MarketParams<T>) -> Result<T, RateModelError> {
        Ok(params.borrow_apy(self.utilization_rate()?))
    }

    /// Current supply APY under `params`.
    pub fn supply_apy(&self, params: &MarketParams<T>) -> Result<T, RateModelError> {
        Ok(params.supply_apy(self.utilization_rate()?))
    }

    /// Accrue borrow interest up to `block_number`.
    ///
    /// Interest accrues at the borrow rate of the current utilisation for
    /// every elapsed block:
    ///
    /// ```text
    /// interest  = borrows * rate * delta
    /// reserves += interest * reserve_factor
    /// index    += index * rate * delta
    /// ```
    ///
    /// Returns the interest added to borrows, zero when no block elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`RateModelError::ZeroLiquidity`] when blocks elapsed but the
    /// pool has no liquidity to derive a utilisation from.
    pub fn accrue_interest(
        &mut self,
        params: &MarketParams<T>,
        block_number: u64,
    ) -> Result<T, RateModelError> {
        if self.borrow_index <= T::zero() {
            self.borrow_index = T::one();
        }

        let delta = match block_number.checked_sub(self.block_number) {
            Some(d) if d > 0 => d,
            _ => return Ok(T::zero()),
        };

        let rate = params
            .model
            .borrow_rate_per_block(self.utilization_rate()?);
        let times_rate = rate * T::from(delta).unwrap_or_else(T::max_value);
        let interest = self.borrows * times_rate;

        self.block_number = block_number;
        self.borrows = self.borrows + interest;
        self.reserves = self.reserves + new_reserves(interest, params.reserve_factor);
        self.borrow_index = self.borrow_index + times_rate * self.borrow_index;

        Ok(interest)
    }
}
