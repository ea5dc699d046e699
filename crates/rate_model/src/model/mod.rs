//! Interest rate models for lending pools.
//!
//! This module provides:
//! - [`InterestRateModel`]: Trait for per-block and annualised borrow/supply rates
//! - [`JumpRateModel`]: Kinked piecewise-linear model
//! - [`BLOCKS_PER_YEAR`]: Block count used to convert between yearly and per-block rates
//! - Flat-argument helpers ([`borrow_rate_per_block`], [`supply_rate_per_block`],
//!   [`borrow_apy`], [`supply_apy`]) for one-off evaluations

mod jump_rate;
mod traits;

pub use jump_rate::JumpRateModel;
pub use traits::{blocks_per_year, InterestRateModel, BLOCKS_PER_YEAR};

use num_traits::Float;

/// Borrow rate per block for a jump rate model given by its yearly parameters.
pub fn borrow_rate_per_block<T: Float>(
    utilization: T,
    base_rate: T,
    multiplier: T,
    jump_multiplier: T,
    kink: T,
) -> T {
    JumpRateModel::new(base_rate, multiplier, jump_multiplier, kink)
        .borrow_rate_per_block(utilization)
}

/// Supply rate per block for a jump rate model given by its yearly parameters.
pub fn supply_rate_per_block<T: Float>(
    utilization: T,
    base_rate: T,
    multiplier: T,
    jump_multiplier: T,
    kink: T,
    reserve_factor: T,
) -> T {
    JumpRateModel::new(base_rate, multiplier, jump_multiplier, kink)
        .supply_rate_per_block(utilization, reserve_factor)
}

/// Annualised borrow rate for a jump rate model given by its yearly parameters.
pub fn borrow_apy<T: Float>(
    utilization: T,
    base_rate: T,
    multiplier: T,
    jump_multiplier: T,
    kink: T,
) -> T {
    JumpRateModel::new(base_rate, multiplier, jump_multiplier, kink).borrow_apy(utilization)
}

/// Annualised supply rate for a jump rate model given by its yearly parameters.
pub fn supply_apy<T: Float>(
    utilization: T,
    base_rate: T,
    multiplier: T,
    jump_multiplier: T,
    kink: T,
    reserve_factor: T,
) -> T {
    JumpRateModel::new(base_rate, multiplier, jump_multiplier, kink)
        .supply_apy(utilization, reserve_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_helpers_match_model() {
        let model = JumpRateModel::new(0.0_f64, 0.058, 1.476, 0.8);
        for &u in &[0.0, 0.4, 0.8, 0.95, 1.0] {
            assert_eq!(
                borrow_rate_per_block(u, 0.0, 0.058, 1.476, 0.8),
                model.borrow_rate_per_block(u)
            );
            assert_eq!(
                supply_rate_per_block(u, 0.0, 0.058, 1.476, 0.8, 0.15),
                model.supply_rate_per_block(u, 0.15)
            );
        }
    }

    #[test]
    fn test_flat_apy_helpers() {
        assert_relative_eq!(borrow_apy(1.0_f64, 0.0, 0.058, 1.476, 0.8), 0.3416, epsilon = 1e-12);
        assert_relative_eq!(
            supply_apy(1.0_f64, 0.0, 0.058, 1.476, 0.8, 0.15),
            0.29036,
            epsilon = 1e-12
        );
    }
}
