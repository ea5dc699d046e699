//! Interest rate model trait definition.

use num_traits::Float;

/// Number of blocks produced per year (one block every 15 seconds).
///
/// Yearly rate parameters are divided by this to obtain per-block rates,
/// and per-block rates are multiplied by it to annualise them.
pub const BLOCKS_PER_YEAR: u32 = 2_102_400;

/// Return [`BLOCKS_PER_YEAR`] in the floating-point type `T`.
#[inline]
pub fn blocks_per_year<T: Float>() -> T {
    // 2_102_400 < 2^24, exactly representable in every Float type
    T::from(BLOCKS_PER_YEAR).unwrap()
}

/// Generic utilisation-driven interest rate model.
///
/// Implementors supply the per-block borrow rate; supply rates and
/// annualised yields follow from it.
///
/// # Contract
///
/// - `borrow_rate_per_block(u)` is the rate charged to borrowers per block
///   at utilisation `u`
/// - `supply_rate_per_block(u, rf)` is `u * borrow_rate_per_block(u) * (1 - rf)`
/// - `borrow_apy` / `supply_apy` scale the per-block rates by
///   [`BLOCKS_PER_YEAR`]
///
/// Inputs are not validated. Utilisation outside [0, 1] or a reserve factor
/// outside [0, 1] is evaluated as given.
///
/// # Example
///
/// ```
/// use rate_model::model::{InterestRateModel, JumpRateModel};
///
/// let model = JumpRateModel::new(0.0_f64, 0.058, 1.476, 0.8);
///
/// let apy = model.borrow_apy(1.0);
/// assert!((apy - 0.3416).abs() < 1e-12);
///
/// let apy = model.supply_apy(1.0, 0.15);
/// assert!((apy - 0.29036).abs() < 1e-12);
/// ```
pub trait InterestRateModel<T: Float> {
    /// Return the borrow rate per block at utilisation `u`.
    fn borrow_rate_per_block(&self, u: T) -> T;

    /// Return the supply rate per block at utilisation `u`.
    ///
    /// ```text
    /// supply = u * borrow(u) * (1 - reserve_factor)
    /// ```
    fn supply_rate_per_block(&self, u: T, reserve_factor: T) -> T {
        let rate_to_pool = self.borrow_rate_per_block(u) * (T::one() - reserve_factor);
        u * rate_to_pool
    }

    /// Return the annualised borrow rate at utilisation `u`.
    fn borrow_apy(&self, u: T) -> T {
        self.borrow_rate_per_block(u) * blocks_per_year()
    }

    /// Return the annualised supply rate at utilisation `u`.
    fn supply_apy(&self, u: T, reserve_factor: T) -> T {
        self.supply_rate_per_block(u, reserve_factor) * blocks_per_year()
    }
}
