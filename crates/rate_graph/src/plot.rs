//! SVG rendering of the rate curves.

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::series::{RateSeries, BORROW_LABEL, SUPPLY_LABEL, X_AXIS_TITLE, Y_AXIS_TITLE};
use plotters::coord::Shift;
use plotters::prelude::*;
use rate_model::RateCurve;
use tracing::debug;

fn render_err<E: std::fmt::Display>(err: E) -> GraphError {
    GraphError::render(err.to_string())
}

/// Draw both curves with axis titles and a legend onto `area`.
pub fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &RateSeries,
    title: &str,
) -> Result<()> {
    area.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            series.x_bounds[0]..series.x_bounds[1],
            series.y_bounds[0]..series.y_bounds[1],
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_TITLE)
        .y_desc(Y_AXIS_TITLE)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.borrow.iter().copied(),
            RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(BORROW_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            series.supply.iter().copied(),
            GREEN.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(SUPPLY_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Render the chart to an SVG document in memory.
pub fn render_svg_string(curve: &RateCurve<f64>, config: &GraphConfig) -> Result<String> {
    let series = RateSeries::from(curve);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_chart(&root, &series, &config.title)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Render the chart and write it to `config.output_path`, replacing any
/// previous image.
pub fn save_svg(curve: &RateCurve<f64>, config: &GraphConfig) -> Result<()> {
    let series = RateSeries::from(curve);
    debug!(path = %config.output_path.display(), "Rendering SVG");

    let root = SVGBackend::new(&config.output_path, (config.width, config.height))
        .into_drawing_area();
    draw_chart(&root, &series, &config.title)?;
    root.present().map_err(render_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep;

    #[test]
    fn test_render_contains_labels() {
        let config = GraphConfig::default();
        let svg = render_svg_string(&sweep(&config), &config).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("compound_rates"));
        assert!(svg.contains(X_AXIS_TITLE));
        assert!(svg.contains(Y_AXIS_TITLE));
        assert!(svg.contains(BORROW_LABEL));
        assert!(svg.contains(SUPPLY_LABEL));
    }

    #[test]
    fn test_render_uses_configured_size() {
        let mut config = GraphConfig::default();
        config.width = 640;
        config.height = 320;
        let svg = render_svg_string(&sweep(&config), &config).unwrap();

        assert!(svg.contains("width=\"640\""));
        assert!(svg.contains("height=\"320\""));
    }

    #[test]
    fn test_save_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GraphConfig::default();
        config.output_path = dir.path().join("compound_rate.svg");

        std::fs::write(&config.output_path, "stale").unwrap();
        save_svg(&sweep(&config), &config).unwrap();

        let written = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(written.starts_with("<svg"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GraphConfig::default();
        config.output_path = dir.path().join("missing").join("compound_rate.svg");

        let err = save_svg(&sweep(&config), &config).unwrap_err();
        assert!(matches!(err, GraphError::Render(_)));
    }
}
