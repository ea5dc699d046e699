//! Diagnostic dump of the raw curve samples.

use rate_model::RateCurve;
use std::io::{self, Write};

/// Format one labelled sequence as `label: [v0, v1, ...]`.
pub fn format_sequence(label: &str, values: &[f64]) -> String {
    format!("{}: {:?}", label, values)
}

/// Write the utilisation samples and both rate sequences, one line each.
pub fn write_curve<W: Write>(out: &mut W, curve: &RateCurve<f64>) -> io::Result<()> {
    writeln!(out, "{}", format_sequence("utilizations", &curve.utilizations()))?;
    writeln!(out, "{}", format_sequence("borrow_rates", &curve.borrow_rates()))?;
    writeln!(out, "{}", format_sequence("supply_rates", &curve.supply_rates()))?;
    out.flush()
}

/// Print the curve samples to stdout.
pub fn print_curve(curve: &RateCurve<f64>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_curve(&mut handle, curve)
}
