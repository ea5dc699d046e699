//! Rate model error types.
//!
//! The rate evaluator itself is infallible; errors only arise when pool
//! balances are turned into ratios.

use thiserror::Error;

/// Errors raised by pool balance computations.
///
/// # Examples
///
/// ```
/// use rate_model::RateModelError;
///
/// let err = RateModelError::ZeroLiquidity { cash: 0.0, borrows: 0.0, reserves: 0.0 };
/// assert!(format!("{}", err).contains("cash = 0"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateModelError {
    /// `cash + borrows - reserves` is zero, so utilisation is undefined.
    #[error("Zero liquidity: cash = {cash}, borrows = {borrows}, reserves = {reserves}")]
    ZeroLiquidity {
        /// Total cash held by the pool
        cash: f64,
        /// Total outstanding borrows
        borrows: f64,
        /// Reserves withheld by the pool
        reserves: f64,
    },
}
