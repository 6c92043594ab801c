use super::parse_separator;
use crate::cli::PlotConfigArgs;
use crate::error::Result;
use anyhow::Context;
use mdpost::core::io::statedata;
use mdpost::core::plotting::ticks;
use mdpost::core::statedata::quantity::Quantity;
use mdpost::core::statedata::series::StateData;
use mdpost::engine::error::EngineError;
use mdpost::workflows::plot;
use toml::{Table, Value};
use tracing::{debug, info};

pub fn run(args: PlotConfigArgs) -> Result<()> {
    let normalized = plot::load_plot_config(&args.config)?;
    info!(
        "The plotting configuration was successfully loaded from '{}'.",
        args.config.display()
    );

    if let Some(state_data) = &args.state_data {
        let separator = parse_separator(args.separator)?;
        let series = statedata::read_state_data_from_path(state_data, separator)
            .map_err(EngineError::from)?;
        preview_ticks(&normalized, &series)?;
    }

    let rendered = toml::to_string_pretty(&Value::Table(normalized))?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            println!("Normalized configuration written to '{}'.", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Prints the tick positions each plot's axes would carry for the given
/// state data, for the plots whose quantity is present in the series.
fn preview_ticks(config: &Table, series: &StateData) -> Result<()> {
    let Some(plots) = config.get("plot").and_then(|v| v.as_table()) else {
        return Ok(());
    };

    // The x-axes plot against time when the series records it, against the
    // recorded step otherwise.
    let time_values = [Quantity::Time, Quantity::Step].iter().find_map(|q| {
        series
            .column_index(q.column_label())
            .map(|column| series.column(column).collect::<Vec<f64>>())
    });

    for (name, block) in plots {
        let Some(block) = block.as_table() else {
            continue;
        };
        let Ok(quantity) = name.parse::<Quantity>() else {
            debug!("'{}' does not name a quantity; skipping preview", name);
            continue;
        };
        let Some(column) = series.column_index(quantity.column_label()) else {
            continue;
        };
        let values: Vec<f64> = series.column(column).collect();

        if let (Some(interval), Some(time_values)) = (axis_interval(block, "xaxis"), &time_values)
        {
            print_axis_ticks(name, "x", time_values, interval)?;
        }
        if let Some(interval) = axis_interval(block, "yaxis") {
            print_axis_ticks(name, "y", &values, interval)?;
        }
    }
    Ok(())
}

fn axis_interval<'a>(block: &'a Table, axis: &str) -> Option<&'a Table> {
    block
        .get(axis)
        .and_then(|v| v.as_table())
        .and_then(|axis| axis.get("interval"))
        .and_then(|v| v.as_table())
}

fn print_axis_ticks(plot: &str, axis: &str, values: &[f64], interval: &Table) -> Result<()> {
    let positions = plot::axis_tick_positions(values, interval)?;
    let labels = ticks::formatted_ticklabels(&positions, 3);
    println!("{} {}-axis ticks: {}", plot, axis, labels.join(", "));
    Ok(())
}
