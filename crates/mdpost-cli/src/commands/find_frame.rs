use super::parse_separator;
use crate::cli::FindFrameArgs;
use crate::error::{CliError, Result};
use mdpost::engine::selection::FrameSelectionMethod;
use mdpost::workflows::frame;
use tracing::info;

pub fn run(args: FindFrameArgs) -> Result<()> {
    let method: FrameSelectionMethod = args
        .method
        .parse()
        .map_err(|e: mdpost::engine::selection::SelectionError| CliError::Argument(e.to_string()))?;
    let separator = parse_separator(args.separator)?;

    let selected = frame::select_frame(
        &args.input_state_data,
        &args.output_frame,
        method,
        separator,
    )?;
    info!(
        "The frame was successfully found with method '{}'.",
        method
    );

    println!(
        "Selected frame written to '{}':",
        args.output_frame.display()
    );
    for (label, value) in selected.iter() {
        println!("  {}: {}", label, value);
    }
    Ok(())
}
