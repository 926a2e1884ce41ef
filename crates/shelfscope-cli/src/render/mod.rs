//! Report renderers for the `inspect` command.

mod json;
mod text;

pub(crate) use json::JsonRenderer;
pub(crate) use text::TextRenderer;

use clap::ValueEnum;

/// Label for any value that is unknown or could not be fetched.
pub(crate) const NOT_AVAILABLE: &str = "N/D";

/// Gauge scale bounds; health values are clamped into this range.
const GAUGE_MIN: f64 = 0.01;
const GAUGE_MAX: f64 = 1.0;
const GAUGE_CELLS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum HealthDisplay {
    /// `Health: 0.75`
    Plain,
    /// A bar gauge between the scale bounds.
    Gauge,
}

impl HealthDisplay {
    pub(crate) fn format(self, health: Option<f64>) -> String {
        match (self, health) {
            (_, None) => format!("Health: {NOT_AVAILABLE}"),
            (HealthDisplay::Plain, Some(value)) => format!("Health: {value:.2}"),
            (HealthDisplay::Gauge, Some(value)) => health_gauge(value),
        }
    }
}

/// `0.01 [#############-------] 1.0  (0.66)`
fn health_gauge(value: f64) -> String {
    let clamped = value.clamp(GAUGE_MIN, GAUGE_MAX);
    let fraction = (clamped - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = (fraction * GAUGE_CELLS as f64).round() as usize;
    format!(
        "Health: {GAUGE_MIN} [{}{}] {GAUGE_MAX:.1}  ({clamped:.2})",
        "#".repeat(filled),
        "-".repeat(GAUGE_CELLS - filled),
    )
}
