//! Chart-ready view of a rate curve, shared by the terminal and image charts.

use rate_model::RateCurve;

/// Borrow label shown in chart legends
pub const BORROW_LABEL: &str = "Borrow APY";
/// Supply label shown in chart legends
pub const SUPPLY_LABEL: &str = "Supply APY";
/// X axis title
pub const X_AXIS_TITLE: &str = "Utilization(%)";
/// Y axis title
pub const Y_AXIS_TITLE: &str = "Rate(%)";

/// Rate curve converted to `(utilisation %, rate %)` points with axis bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSeries {
    /// Borrow rate points
    pub borrow: Vec<(f64, f64)>,
    /// Supply rate points
    pub supply: Vec<(f64, f64)>,
    /// Utilisation axis bounds
    pub x_bounds: [f64; 2],
    /// Rate axis bounds
    pub y_bounds: [f64; 2],
}

impl From<&RateCurve<f64>> for RateSeries {
    fn from(curve: &RateCurve<f64>) -> Self {
        Self {
            borrow: curve.borrow_series(),
            supply: curve.supply_series(),
            x_bounds: [0.0, 100.0],
            y_bounds: curve.y_bounds(),
        }
    }
}

/// Format a rate axis tick.
pub fn format_rate(pct: f64) -> String {
    if pct >= 10.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}
