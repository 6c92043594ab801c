use crate::core::statedata::series::{Frame, SeriesError, StateData};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// The default column separator of state-data files.
pub const DEFAULT_SEPARATOR: u8 = b',';

#[derive(Debug, Error)]
pub enum StateDataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read delimited data: {0}")]
    Csv(#[from] csv::Error),

    #[error("value '{value}' in column '{column}' of row {row} is not a number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Shape(#[from] SeriesError),
}

/// Strips the formatting artifacts a state-data reporter leaves on header
/// cells (a leading `#` and surrounding quotes).
fn strip_header_artifacts(cell: &str) -> String {
    cell.trim_start_matches(['#', '"'])
        .trim_end_matches('"')
        .to_string()
}

/// Reads a state-data series from a delimited text source with one header
/// row.
///
/// # Errors
///
/// Fails on I/O errors, on malformed delimited data, on non-numeric cells,
/// and on rows whose width differs from the header's.
pub fn read_state_data(
    reader: impl Read,
    separator: u8,
) -> Result<StateData, StateDataError> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(strip_header_artifacts)
        .collect();

    let mut rows = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut values = Vec::with_capacity(record.len());
        for (column, cell) in record.iter().enumerate() {
            let value: f64 =
                cell.trim()
                    .parse()
                    .map_err(|_| StateDataError::InvalidValue {
                        row,
                        column: columns
                            .get(column)
                            .cloned()
                            .unwrap_or_else(|| column.to_string()),
                        value: cell.to_string(),
                    })?;
            values.push(value);
        }
        rows.push(values);
    }

    Ok(StateData::new(columns, rows)?)
}

/// Reads a state-data series from a file path.
pub fn read_state_data_from_path<P: AsRef<Path>>(
    path: P,
    separator: u8,
) -> Result<StateData, StateDataError> {
    let file = File::open(path)?;
    read_state_data(BufReader::new(file), separator)
}

/// Writes a selected frame as a one-line delimited record of its values, in
/// column order and without a header.
pub fn write_frame(writer: impl Write, frame: &Frame) -> Result<(), StateDataError> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(DEFAULT_SEPARATOR)
        .from_writer(writer);
    let fields: Vec<String> = frame.values().map(|value| value.to_string()).collect();
    csv_writer.write_record(&fields)?;
    csv_writer.flush()?;
    Ok(())
}

/// Writes a selected frame to a file path.
pub fn write_frame_to_path<P: AsRef<Path>>(path: P, frame: &Frame) -> Result<(), StateDataError> {
    let file = File::create(path)?;
    write_frame(BufWriter::new(file), frame)
}
