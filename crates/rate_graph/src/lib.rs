//! # Rate Graph
//!
//! Sweeps a lending pool's jump rate model across utilisation and plots the
//! resulting borrow and supply APY curves.
//!
//! ## Pipeline
//! - **Sweep**: evaluate the model at evenly spaced utilisations (`rate_model`)
//! - **Report**: print the raw samples to stdout (`report`)
//! - **View**: interactive terminal chart, ratatui over crossterm (`viewer`)
//! - **Plot**: persist the chart as an SVG image with plotters (`plot`)

pub mod config;
pub mod error;
pub mod plot;
pub mod report;
pub mod series;
pub mod viewer;

use config::GraphConfig;
use rate_model::RateCurve;
use tracing::info;
use viewer::CurveViewer;

pub use error::{GraphError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GraphConfig;
    pub use crate::error::{GraphError, Result};
    pub use crate::viewer::CurveViewer;
    pub use crate::{run, sweep};
}

/// Sweep the configured market across utilisation.
pub fn sweep(config: &GraphConfig) -> RateCurve<f64> {
    config.market.curve(config.samples)
}

/// Sweep, print, display and persist the rate curves for `config`.
pub fn run(config: &GraphConfig) -> Result<()> {
    let curve = sweep(config);
    info!(samples = curve.len(), "Swept utilisation");

    report::print_curve(&curve)?;

    CurveViewer::new()?.show(&curve, &config.title)?;

    plot::save_svg(&curve, config)?;
    info!(path = %config.output_path.display(), "Saved rate chart");

    Ok(())
}
