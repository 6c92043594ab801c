use crate::core::plotting::ticks::{self, TicksOptions};
use crate::engine::error::EngineError;
use crate::engine::normalize;
use std::path::Path;
use toml::{Table, Value};
use tracing::{info, instrument};

/// Loads a plotting configuration document and normalizes it: the plot type
/// discriminator is validated, the shared `general` block is folded
/// underneath every per-plot block, and the recognized sub-sections are
/// denylist-filtered.
///
/// # Errors
///
/// Fails when the document cannot be read or parsed, or when normalization
/// rejects it.
#[instrument(level = "info", skip_all)]
pub fn load_plot_config(path: impl AsRef<Path>) -> Result<Table, EngineError> {
    let text = std::fs::read_to_string(path)?;
    let raw: Table = toml::from_str(&text)?;
    let normalized = normalize::normalize_plot_config(&raw)?;
    info!("plot configuration normalized");
    Ok(normalized)
}

/// Computes the tick positions an axis would carry for the given plotted
/// values, from an axis `interval` block of a normalized plot configuration.
pub fn axis_tick_positions(values: &[f64], interval: &Table) -> Result<Vec<f64>, EngineError> {
    let options: TicksOptions = Value::Table(interval.clone())
        .try_into()
        .map_err(EngineError::Parse)?;
    Ok(ticks::ticks_positions(values, &options)?)
}
