use crate::core::statedata::quantity::Quantity;
use crate::core::statedata::series::{Frame, StateData};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SelectionError {
    #[error("the state data series contains no rows")]
    EmptySeries,

    #[error("column '{0}' was not found in the state data")]
    ColumnNotFound(String),

    #[error("column '{column}' contains a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("'{0}' is not a supported frame-selection method")]
    UnsupportedMethod(String),
}

/// A method for selecting one representative frame from a state-data series.
///
/// The set is closed over the supported quantity/pool combinations; parsing
/// any other name fails with [`SelectionError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSelectionMethod {
    ClosestToMeanTemperature,
    ClosestToMeanTemperatureSecondHalf,
    ClosestToMeanDensity,
    ClosestToMeanDensitySecondHalf,
    ClosestToMeanVolume,
    ClosestToMeanVolumeSecondHalf,
}

impl FrameSelectionMethod {
    pub const ALL: [FrameSelectionMethod; 6] = [
        FrameSelectionMethod::ClosestToMeanTemperature,
        FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf,
        FrameSelectionMethod::ClosestToMeanDensity,
        FrameSelectionMethod::ClosestToMeanDensitySecondHalf,
        FrameSelectionMethod::ClosestToMeanVolume,
        FrameSelectionMethod::ClosestToMeanVolumeSecondHalf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FrameSelectionMethod::ClosestToMeanTemperature => "closest_to_mean_temperature",
            FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf => {
                "closest_to_mean_temperature_second_half"
            }
            FrameSelectionMethod::ClosestToMeanDensity => "closest_to_mean_density",
            FrameSelectionMethod::ClosestToMeanDensitySecondHalf => {
                "closest_to_mean_density_second_half"
            }
            FrameSelectionMethod::ClosestToMeanVolume => "closest_to_mean_volume",
            FrameSelectionMethod::ClosestToMeanVolumeSecondHalf => {
                "closest_to_mean_volume_second_half"
            }
        }
    }

    /// The quantity whose mean the method targets.
    pub fn quantity(&self) -> Quantity {
        match self {
            FrameSelectionMethod::ClosestToMeanTemperature
            | FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf => Quantity::Temperature,
            FrameSelectionMethod::ClosestToMeanDensity
            | FrameSelectionMethod::ClosestToMeanDensitySecondHalf => Quantity::Density,
            FrameSelectionMethod::ClosestToMeanVolume
            | FrameSelectionMethod::ClosestToMeanVolumeSecondHalf => Quantity::BoxVolume,
        }
    }

    /// Whether the mean is computed over the second half of the series only.
    pub fn uses_second_half(&self) -> bool {
        matches!(
            self,
            FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf
                | FrameSelectionMethod::ClosestToMeanDensitySecondHalf
                | FrameSelectionMethod::ClosestToMeanVolumeSecondHalf
        )
    }
}

impl FromStr for FrameSelectionMethod {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|method| method.name() == s)
            .copied()
            .ok_or_else(|| SelectionError::UnsupportedMethod(s.to_string()))
    }
}

impl fmt::Display for FrameSelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects the frame whose value of the method's quantity is closest to that
/// quantity's mean.
///
/// The series splits at `len / 2` into two contiguous halves. The mean runs
/// over the whole series, or over the second half only for the
/// `*_second_half` methods. The candidate pool searched for the minimum
/// absolute difference is the second half in either case, so a whole-series
/// mean is compared against second-half candidates; equidistant candidates
/// resolve to the lowest step. Pure over its inputs: the same series and
/// method always select the same frame.
///
/// # Errors
///
/// Fails on an empty series, when the quantity's column is absent, and when
/// the column contains a non-finite value.
#[instrument(level = "debug", skip(series, method), fields(method = method.name()))]
pub fn find_frame(
    series: &StateData,
    method: FrameSelectionMethod,
) -> Result<Frame, SelectionError> {
    closest_to_average(series, method.quantity(), method.uses_second_half())
}

fn closest_to_average(
    series: &StateData,
    quantity: Quantity,
    use_second_half: bool,
) -> Result<Frame, SelectionError> {
    if series.is_empty() {
        return Err(SelectionError::EmptySeries);
    }

    let label = quantity.column_label();
    let column = series
        .column_index(label)
        .ok_or_else(|| SelectionError::ColumnNotFound(label.to_string()))?;

    for (row, value) in series.column(column).enumerate() {
        if !value.is_finite() {
            return Err(SelectionError::NonFiniteValue {
                column: label.to_string(),
                row,
            });
        }
    }

    let middle = series.len() / 2;
    let mean_pool = if use_second_half {
        middle..series.len()
    } else {
        0..series.len()
    };
    let count = mean_pool.len();
    let sum: f64 = mean_pool.map(|row| series.value(row, column)).sum();
    let mean = sum / count as f64;

    // The candidate pool is the second half regardless of the mean pool.
    let mut best_row = middle;
    let mut best_diff = f64::INFINITY;
    for row in middle..series.len() {
        let diff = (series.value(row, column) - mean).abs();
        if diff < best_diff {
            best_diff = diff;
            best_row = row;
        }
    }

    debug!(row = best_row, mean, "selected frame");
    Ok(series.frame(best_row))
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    fn series_with_temperatures(temperatures: &[f64]) -> StateData {
        let rows = temperatures
            .iter()
            .enumerate()
            .map(|(step, &t)| vec![step as f64, t])
            .collect();
        StateData::new(
            vec!["Step".to_string(), "Temperature (K)".to_string()],
            rows,
        )
        .unwrap()
    }

    #[test]
    fn every_method_name_round_trips() {
        for method in FrameSelectionMethod::ALL {
            let parsed: FrameSelectionMethod = method.name().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn unknown_method_name_is_rejected() {
        let result = "closest_to_mean_pressure".parse::<FrameSelectionMethod>();
        assert_eq!(
            result,
            Err(SelectionError::UnsupportedMethod(
                "closest_to_mean_pressure".to_string()
            ))
        );
    }

    #[test]
    fn volume_methods_target_the_box_volume_column() {
        assert_eq!(
            FrameSelectionMethod::ClosestToMeanVolume.quantity(),
            Quantity::BoxVolume
        );
        assert_eq!(
            FrameSelectionMethod::ClosestToMeanVolumeSecondHalf.quantity(),
            Quantity::BoxVolume
        );
    }

    #[test]
    fn empty_series_is_rejected() {
        let series = series_with_temperatures(&[]);
        assert_eq!(
            find_frame(&series, FrameSelectionMethod::ClosestToMeanTemperature),
            Err(SelectionError::EmptySeries)
        );
    }

    #[test]
    fn missing_column_is_rejected() {
        let series = StateData::new(
            vec!["Step".to_string()],
            vec![vec![0.0], vec![100.0]],
        )
        .unwrap();
        assert_eq!(
            find_frame(&series, FrameSelectionMethod::ClosestToMeanDensity),
            Err(SelectionError::ColumnNotFound(
                "Density (g/mL)".to_string()
            ))
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let series = series_with_temperatures(&[300.0, f64::NAN, 301.0]);
        assert_eq!(
            find_frame(&series, FrameSelectionMethod::ClosestToMeanTemperature),
            Err(SelectionError::NonFiniteValue {
                column: "Temperature (K)".to_string(),
                row: 1,
            })
        );
    }

    #[test]
    fn single_row_series_returns_that_row() {
        let series = series_with_temperatures(&[300.0]);
        for method in [
            FrameSelectionMethod::ClosestToMeanTemperature,
            FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf,
        ] {
            let frame = find_frame(&series, method).unwrap();
            assert_eq!(frame.get("Step"), Some(0.0));
            assert_eq!(frame.get("Temperature (K)"), Some(300.0));
        }
    }

    #[test]
    fn whole_series_mean_searches_the_second_half() {
        // Mean over all ten rows is 11.5; the closest second-half value is
        // 11 at step 9, even though step 2 in the first half matches better.
        let series = series_with_temperatures(&[
            10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 13.0, 12.0, 11.0,
        ]);
        let frame =
            find_frame(&series, FrameSelectionMethod::ClosestToMeanTemperature).unwrap();
        assert_eq!(frame.get("Step"), Some(9.0));
        assert_eq!(frame.get("Temperature (K)"), Some(11.0));
    }

    #[test]
    fn second_half_methods_use_the_second_half_mean() {
        // Second-half values [14, 10, 13, 12, 11] have mean 12; the closest
        // value is 12 at step 8.
        let series = series_with_temperatures(&[
            10.0, 12.0, 11.0, 13.0, 9.0, 14.0, 10.0, 13.0, 12.0, 11.0,
        ]);
        let frame = find_frame(
            &series,
            FrameSelectionMethod::ClosestToMeanTemperatureSecondHalf,
        )
        .unwrap();
        assert_eq!(frame.get("Step"), Some(8.0));
    }

    #[test]
    fn ties_resolve_to_the_lowest_step() {
        // Mean is 20; steps 2 and 3 are both off by 1.
        let series = series_with_temperatures(&[20.0, 20.0, 21.0, 19.0]);
        let frame =
            find_frame(&series, FrameSelectionMethod::ClosestToMeanTemperature).unwrap();
        assert_eq!(frame.get("Step"), Some(2.0));
    }

    #[test]
    fn selection_is_idempotent() {
        let series = series_with_temperatures(&[300.2, 299.9, 300.4, 300.0, 299.7]);
        let method = FrameSelectionMethod::ClosestToMeanTemperature;
        assert_eq!(
            find_frame(&series, method).unwrap(),
            find_frame(&series, method).unwrap()
        );
    }

    #[test]
    fn selected_row_lies_within_the_series() {
        let series = series_with_temperatures(&[301.0, 299.0, 300.5, 300.2, 299.8, 300.1]);
        let frame =
            find_frame(&series, FrameSelectionMethod::ClosestToMeanTemperature).unwrap();
        let step = frame.get("Step").unwrap();
        assert!((0.0..6.0).contains(&step));
    }
}
