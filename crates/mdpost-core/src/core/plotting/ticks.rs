use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum TicksError {
    #[error("cannot derive a ticks interval from an empty set of values")]
    EmptyValues,
    #[error("'round_to_nearest' must be positive, got {0}")]
    InvalidRounding(f64),
    #[error("'steps' must be at least 2, got {0}")]
    TooFewSteps(usize),
    #[error("'spacing' must be positive, got {0}")]
    InvalidSpacing(f64),
}

/// Whether the tick interval covers a discrete or a continuous quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    Discrete,
    Continuous,
}

/// Options describing the interval the ticks should cover.
///
/// Unset fields fall back to defaults derived from the plotted values:
/// rounding to the nearest 1 (discrete) or 0.5 (continuous), the rounded
/// extrema of the values, ten steps, and the rounded-up even spacing between
/// steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicksOptions {
    #[serde(rename = "type")]
    pub interval_type: IntervalType,
    #[serde(default)]
    pub round_to_nearest: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub steps: Option<usize>,
    #[serde(default)]
    pub spacing: Option<f64>,
    #[serde(default)]
    pub center_in_zero: bool,
}

impl TicksOptions {
    pub fn new(interval_type: IntervalType) -> Self {
        Self {
            interval_type,
            round_to_nearest: None,
            top: None,
            bottom: None,
            steps: None,
            spacing: None,
            center_in_zero: false,
        }
    }
}

fn round_up_to(value: f64, rounding: f64) -> f64 {
    (value * (1.0 / rounding)).ceil() / (1.0 / rounding)
}

fn round_down_to(value: f64, rounding: f64) -> f64 {
    (value * (1.0 / rounding)).floor() / (1.0 / rounding)
}

fn linspace(bottom: f64, top: f64, steps: usize) -> Vec<f64> {
    let step = (top - bottom) / (steps as f64 - 1.0);
    (0..steps).map(|i| bottom + i as f64 * step).collect()
}

/// Generates the positions the ticks will have on a plot axis.
///
/// `values` are the plotted data the interval must cover; they are only
/// consulted for the extrema the options leave unset.
///
/// # Errors
///
/// Fails when an extremum must be derived from an empty `values` slice, or
/// when the options request a non-positive rounding/spacing or fewer than
/// two steps.
pub fn ticks_positions(values: &[f64], options: &TicksOptions) -> Result<Vec<f64>, TicksError> {
    let rounding = options
        .round_to_nearest
        .unwrap_or(match options.interval_type {
            IntervalType::Discrete => 1.0,
            IntervalType::Continuous => 0.5,
        });
    if rounding <= 0.0 {
        return Err(TicksError::InvalidRounding(rounding));
    }

    let top = match options.top {
        Some(top) => top,
        None => {
            let max = values
                .iter()
                .copied()
                .reduce(f64::max)
                .ok_or(TicksError::EmptyValues)?;
            match options.interval_type {
                IntervalType::Discrete => max.ceil(),
                IntervalType::Continuous => round_up_to(max, rounding),
            }
        }
    };

    let bottom = match options.bottom {
        Some(bottom) => bottom,
        None => {
            let min = values
                .iter()
                .copied()
                .reduce(f64::min)
                .ok_or(TicksError::EmptyValues)?;
            match options.interval_type {
                // Truncation toward zero, matching integer conversion.
                IntervalType::Discrete => min.trunc(),
                IntervalType::Continuous => round_down_to(min, rounding),
            }
        }
    };

    // Degenerate interval: a single tick.
    if top == bottom {
        return Ok(vec![bottom]);
    }

    let steps = options.steps.unwrap_or(10);
    if steps < 2 {
        return Err(TicksError::TooFewSteps(steps));
    }

    if options.center_in_zero {
        let absval = if top > bottom {
            top.ceil()
        } else {
            bottom.floor()
        };
        return Ok(linspace(-absval, absval, steps));
    }

    let spacing = match options.spacing {
        Some(spacing) => spacing,
        None => {
            let step = (top - bottom) / (steps as f64 - 1.0);
            match options.interval_type {
                IntervalType::Discrete => step.ceil(),
                IntervalType::Continuous => round_up_to(step, rounding),
            }
        }
    };
    if spacing <= 0.0 {
        return Err(TicksError::InvalidSpacing(spacing));
    }

    // Arithmetic progression over the half-open interval
    // [bottom, top + spacing), so the top value itself is included.
    let count = (((top + spacing) - bottom) / spacing).ceil() as usize;
    Ok((0..count).map(|i| bottom + i as f64 * spacing).collect())
}

/// Formats tick positions as labels with a fixed number of decimals,
/// stripping trailing zeroes (and a then-trailing dot) so integral positions
/// read as integers.
pub fn formatted_ticklabels(ticks: &[f64], precision: usize) -> Vec<String> {
    ticks
        .iter()
        .map(|tick| {
            let label = format!("{:.*}", precision, tick);
            if label == "0" {
                return label;
            }
            if label.contains('.') {
                let trimmed = label.trim_end_matches('0').trim_end_matches('.');
                return trimmed.to_string();
            }
            label
        })
        .collect()
}
