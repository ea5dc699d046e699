//! Rate Graph entry point
//!
//! Sweeps the example market, prints the samples, shows the chart in the
//! terminal and saves it to `compound_rate.svg`.

use anyhow::Result;
use rate_graph::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the curve samples
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("rate_graph=info".parse()?))
        .init();

    let config = GraphConfig::default();
    tracing::info!(
        samples = config.samples,
        output = %config.output_path.display(),
        "Rate graph starting"
    );

    run(&config)?;

    Ok(())
}
