use crate::core::io::statedata;
use crate::core::statedata::series::Frame;
use crate::engine::error::EngineError;
use crate::engine::selection::{self, FrameSelectionMethod};
use std::path::Path;
use tracing::{info, instrument};

/// Selects a frame from a state-data file and writes it to `output` as a
/// one-line record.
///
/// `separator` is the column separator of the input file; the output record
/// is always comma-separated.
///
/// # Errors
///
/// Fails when the state data cannot be read, when the selection itself
/// fails, or when the selected frame cannot be written.
#[instrument(level = "info", skip_all, fields(method = method.name()))]
pub fn select_frame(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    method: FrameSelectionMethod,
    separator: u8,
) -> Result<Frame, EngineError> {
    let series = statedata::read_state_data_from_path(&input, separator)?;
    info!(rows = series.len(), "state data loaded");

    let frame = selection::find_frame(&series, method)?;

    statedata::write_frame_to_path(&output, &frame)?;
    info!("selected frame written");
    Ok(frame)
}
