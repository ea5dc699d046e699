//! Rate graph configuration.
//!
//! Every value is fixed in code; the tool takes no arguments and reads no
//! configuration files.

use rate_model::MarketParams;
use std::path::PathBuf;

/// Default number of utilisation samples
pub const DEFAULT_SAMPLES: usize = 100;

/// Rate graph configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Rate model and reserve factor to sweep
    pub market: MarketParams<f64>,

    /// Number of utilisation samples from 0% to 100%
    pub samples: usize,

    /// Image written on every run, relative to the working directory
    pub output_path: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Chart title
    pub title: String,
}

fn default_market() -> MarketParams<f64> {
    MarketParams::new(0.0, 0.058, 1.476, 0.8, 0.15)
}

fn default_output_path() -> PathBuf {
    PathBuf::from("compound_rate.svg")
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            market: default_market(),
            samples: DEFAULT_SAMPLES,
            output_path: default_output_path(),
            width: 800,
            height: 400,
            title: "compound_rates".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_model::InterestRateModel;

    #[test]
    fn test_default_market_parameters() {
        let config = GraphConfig::default();
        let model = config.market.model;
        assert_eq!(model.base_rate(), 0.0);
        assert_eq!(model.multiplier(), 0.058);
        assert_eq!(model.jump_multiplier(), 1.476);
        assert_eq!(model.kink(), 0.8);
        assert_eq!(config.market.reserve_factor, 0.15);
    }

    #[test]
    fn test_default_output() {
        let config = GraphConfig::default();
        assert_eq!(config.samples, 100);
        assert_eq!(config.output_path, PathBuf::from("compound_rate.svg"));
        assert!(config.output_path.is_relative());
        assert_eq!((config.width, config.height), (800, 400));
        assert_eq!(config.title, "compound_rates");
    }

    #[test]
    fn test_default_market_is_evaluable() {
        let config = GraphConfig::default();
        assert!((config.market.model.borrow_apy(1.0) - 0.3416).abs() < 1e-12);
    }
}
