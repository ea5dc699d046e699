//! Pipeline Integration Tests
//!
//! Exercises sweep, report and plot together without a terminal.

use approx::assert_relative_eq;
use rate_graph::plot::{render_svg_string, save_svg};
use rate_graph::prelude::*;
use rate_graph::report::write_curve;

#[test]
fn test_default_sweep_matches_example_market() {
    let curve = sweep(&GraphConfig::default());
    let points = curve.points();

    assert_eq!(points.len(), 100);
    assert_eq!(points[0].borrow_apy, 0.0);
    assert_eq!(points[0].supply_apy, 0.0);
    assert_relative_eq!(points[99].borrow_apy, 0.3416, epsilon = 1e-12);
    assert_relative_eq!(points[99].supply_apy, 0.29036, epsilon = 1e-12);
}

#[test]
fn test_report_then_plot() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = GraphConfig::default();
    config.output_path = dir.path().join("compound_rate.svg");

    let curve = sweep(&config);

    let mut out = Vec::new();
    write_curve(&mut out, &curve).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("utilizations: [0.0, "));
    assert!(text.lines().next().unwrap().ends_with("100.0]"));

    save_svg(&curve, &config).unwrap();
    let on_disk = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(on_disk, render_svg_string(&curve, &config).unwrap());
}
