//! # rate_model: Interest Rate Kernel for Lending Pools
//!
//! ## Foundation Role
//!
//! rate_model is the bottom layer of the rate-graph workspace, providing:
//! - The jump rate model and its per-block / annualised rates (`model`)
//! - Pool balance helpers: utilisation, exchange rate, accrual (`market`)
//! - Utilisation sweeps producing borrow/supply rate curves (`curve`)
//! - Error types: `RateModelError` (`error`)
//!
//! All computation is generic over `T: num_traits::Float` and free of I/O.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rate_model::model::{InterestRateModel, JumpRateModel};
//!
//! let model = JumpRateModel::new(0.0_f64, 0.058, 1.476, 0.8);
//!
//! // At the kink only the normal slope applies
//! let borrow = model.borrow_apy(0.8);
//! assert!((borrow - 0.0464).abs() < 1e-12);
//!
//! // Suppliers earn utilisation-weighted borrow interest net of reserves
//! let supply = model.supply_apy(0.8, 0.15);
//! assert!((supply - 0.031552).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for model parameters and curves

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod error;
pub mod market;
pub mod model;

pub use curve::{linspace, RateCurve, RatePoint};
pub use error::RateModelError;
pub use market::{MarketParams, MarketSnapshot};
pub use model::{InterestRateModel, JumpRateModel, BLOCKS_PER_YEAR};
