use crate::core::config::merge::merge;
use crate::core::config::sections::{PlotSection, filter_section};
use thiserror::Error;
use toml::{Table, Value};
use tracing::{debug, instrument};

/// The plot types the normalizer recognizes.
pub const SUPPORTED_PLOT_TYPES: [&str; 1] = ["lineplots"];

/// The key carrying the shared defaults block among the per-plot blocks.
const GENERAL_BLOCK: &str = "general";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum PlotConfigError {
    #[error("the plot 'type' must be specified in the configuration; supported plot types are: 'lineplots'")]
    MissingPlotType,

    #[error("the plot type '{0}' is invalid; supported plot types are: 'lineplots'")]
    UnsupportedPlotType(String),

    #[error("the '{0}' section is required")]
    MissingSection(&'static str),

    #[error("'{section}' has an invalid shape: expected {expected}")]
    InvalidSectionShape {
        section: String,
        expected: &'static str,
    },
}

fn expect_table<'a>(
    value: &'a Value,
    section: &str,
) -> Result<&'a Table, PlotConfigError> {
    value
        .as_table()
        .ok_or_else(|| PlotConfigError::InvalidSectionShape {
            section: section.to_string(),
            expected: "a table",
        })
}

/// Replaces a sub-section of `block` with its denylist-filtered copy, if it
/// is present.
fn filter_subsection(
    block: &mut Table,
    key: &str,
    section: PlotSection,
) -> Result<(), PlotConfigError> {
    if let Some(value) = block.get(key) {
        let filtered = filter_section(expect_table(value, key)?, section.denylist());
        block.insert(key.to_string(), Value::Table(filtered));
    }
    Ok(())
}

/// Filters an `xaxis`/`yaxis` block: the block itself passes through, while
/// its nested `label` and `ticklabels` blocks are denylist-filtered.
fn filter_axis_section(axis: &Table, section: &str) -> Result<Table, PlotConfigError> {
    let mut filtered = axis.clone();
    let label_key = format!("{section}.label");
    if let Some(value) = axis.get("label") {
        let label = filter_section(expect_table(value, &label_key)?, PlotSection::AxisLabel.denylist());
        filtered.insert("label".to_string(), Value::Table(label));
    }
    let ticklabels_key = format!("{section}.ticklabels");
    if let Some(value) = axis.get("ticklabels") {
        let ticklabels = filter_section(
            expect_table(value, &ticklabels_key)?,
            PlotSection::AxisTickLabels.denylist(),
        );
        filtered.insert("ticklabels".to_string(), Value::Table(ticklabels));
    }
    Ok(filtered)
}

/// Normalizes the per-plot blocks of a `lineplots` configuration.
///
/// The `general` block, when present, supplies defaults merged underneath
/// every sibling block (per-plot values win); the recognized `lineplot`,
/// `title`, `xaxis`, and `yaxis` sub-sections of each resulting block are
/// then denylist-filtered. Absent sub-sections are skipped; a recognized
/// sub-section that is not a table is rejected.
pub fn normalize_lineplots(plots: &Table) -> Result<Table, PlotConfigError> {
    let general = match plots.get(GENERAL_BLOCK) {
        None => None,
        Some(value) => Some(expect_table(value, GENERAL_BLOCK)?),
    };

    let mut normalized = Table::new();
    for (name, value) in plots {
        if name == GENERAL_BLOCK {
            continue;
        }
        let block = expect_table(value, name)?;
        let mut block = match general {
            Some(general) => merge(block, general),
            None => block.clone(),
        };

        filter_subsection(&mut block, "lineplot", PlotSection::Lineplot)?;
        filter_subsection(&mut block, "title", PlotSection::Title)?;
        for axis in ["xaxis", "yaxis"] {
            if let Some(value) = block.get(axis) {
                let filtered = filter_axis_section(expect_table(value, axis)?, axis)?;
                block.insert(axis.to_string(), Value::Table(filtered));
            }
        }

        normalized.insert(name.clone(), Value::Table(block));
    }
    Ok(normalized)
}

/// Normalizes a full plotting configuration.
///
/// The document must carry a recognized plot `type` discriminator. The
/// `output` section, when present, is denylist-filtered; the `plot` section
/// is required and normalized per plot type.
#[instrument(level = "debug", skip(raw))]
pub fn normalize_plot_config(raw: &Table) -> Result<Table, PlotConfigError> {
    match raw.get("type") {
        None => return Err(PlotConfigError::MissingPlotType),
        Some(value) => {
            let plot_type = value
                .as_str()
                .ok_or_else(|| PlotConfigError::InvalidSectionShape {
                    section: "type".to_string(),
                    expected: "a string",
                })?;
            if !SUPPORTED_PLOT_TYPES.contains(&plot_type) {
                return Err(PlotConfigError::UnsupportedPlotType(plot_type.to_string()));
            }
        }
    }

    let mut normalized = raw.clone();

    if let Some(value) = raw.get("output") {
        let output = filter_section(expect_table(value, "output")?, PlotSection::Output.denylist());
        normalized.insert("output".to_string(), Value::Table(output));
    }

    let plots = raw
        .get("plot")
        .ok_or(PlotConfigError::MissingSection("plot"))?;
    let plots = normalize_lineplots(expect_table(plots, "plot")?)?;
    debug!(plots = plots.len(), "normalized plot configuration");
    normalized.insert("plot".to_string(), Value::Table(plots));

    Ok(normalized)
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    fn table(text: &str) -> Table {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn general_block_supplies_defaults_and_per_plot_wins() {
        let plots = table(
            r#"
[general.lineplot]
color = "black"
linewidth = 0.5

[temperature.lineplot]
color = "firebrick"

[density.lineplot]
linestyle = "--"
"#,
        );
        let normalized = normalize_lineplots(&plots).unwrap();
        assert!(!normalized.contains_key("general"));

        let temperature = normalized["temperature"]["lineplot"].as_table().unwrap();
        assert_eq!(
            temperature.get("color").and_then(|v| v.as_str()),
            Some("firebrick")
        );
        assert_eq!(
            temperature.get("linewidth").and_then(|v| v.as_float()),
            Some(0.5)
        );

        let density = normalized["density"]["lineplot"].as_table().unwrap();
        assert_eq!(
            density.get("color").and_then(|v| v.as_str()),
            Some("black")
        );
        assert_eq!(
            density.get("linestyle").and_then(|v| v.as_str()),
            Some("--")
        );
    }

    #[test]
    fn missing_general_block_leaves_plots_unchanged() {
        let plots = table("[temperature.title]\nfontsize = 10");
        let normalized = normalize_lineplots(&plots).unwrap();
        assert_eq!(normalized, plots);
    }

    #[test]
    fn recognized_subsections_are_filtered() {
        let plots = table(
            r#"
[temperature.lineplot]
color = "black"
xdata = [1, 2]

[temperature.title]
text = "overridden elsewhere"
fontsize = 10

[temperature.xaxis.label]
labelpad = 2.0
clip_box = true

[temperature.xaxis.ticklabels]
fmt = "{:.1f}"
labels = ["a", "b"]
"#,
        );
        let normalized = normalize_lineplots(&plots).unwrap();
        let plot = normalized["temperature"].as_table().unwrap();

        let lineplot = plot["lineplot"].as_table().unwrap();
        assert!(!lineplot.contains_key("xdata"));
        assert!(lineplot.contains_key("color"));

        let title = plot["title"].as_table().unwrap();
        assert!(!title.contains_key("text"));
        assert!(title.contains_key("fontsize"));

        let label = plot["xaxis"]["label"].as_table().unwrap();
        assert!(!label.contains_key("clip_box"));
        assert!(label.contains_key("labelpad"));

        let ticklabels = plot["xaxis"]["ticklabels"].as_table().unwrap();
        assert!(!ticklabels.contains_key("labels"));
        assert!(ticklabels.contains_key("fmt"));
    }

    #[test]
    fn axis_interval_options_pass_through_unfiltered() {
        let plots = table(
            "[temperature.yaxis.interval]\ntype = \"continuous\"\nsteps = 5",
        );
        let normalized = normalize_lineplots(&plots).unwrap();
        let interval = normalized["temperature"]["yaxis"]["interval"]
            .as_table()
            .unwrap();
        assert_eq!(interval.get("steps").and_then(|v| v.as_integer()), Some(5));
    }

    #[test]
    fn non_table_subsection_is_rejected() {
        let plots = table("[temperature]\nlineplot = \"thin\"");
        assert_eq!(
            normalize_lineplots(&plots),
            Err(PlotConfigError::InvalidSectionShape {
                section: "lineplot".to_string(),
                expected: "a table",
            })
        );
    }

    #[test]
    fn missing_plot_type_is_rejected() {
        let raw = table("[plot.temperature]");
        assert_eq!(
            normalize_plot_config(&raw),
            Err(PlotConfigError::MissingPlotType)
        );
    }

    #[test]
    fn unsupported_plot_type_is_rejected() {
        let raw = table("type = \"heatmaps\"\n[plot.temperature]");
        assert_eq!(
            normalize_plot_config(&raw),
            Err(PlotConfigError::UnsupportedPlotType("heatmaps".to_string()))
        );
    }

    #[test]
    fn output_section_is_filtered_and_type_is_kept() {
        let raw = table(
            r#"
type = "lineplots"

[output]
dpi = 300
fname = "plot.pdf"

[plot.general.lineplot]
color = "black"

[plot.temperature.lineplot]
linewidth = 1.0
"#,
        );
        let normalized = normalize_plot_config(&raw).unwrap();
        assert_eq!(
            normalized.get("type").and_then(|v| v.as_str()),
            Some("lineplots")
        );
        let output = normalized["output"].as_table().unwrap();
        assert!(!output.contains_key("fname"));
        assert!(output.contains_key("dpi"));
        let lineplot = normalized["plot"]["temperature"]["lineplot"]
            .as_table()
            .unwrap();
        assert_eq!(
            lineplot.get("color").and_then(|v| v.as_str()),
            Some("black")
        );
    }

    #[test]
    fn missing_plot_section_is_rejected() {
        let raw = table("type = \"lineplots\"");
        assert_eq!(
            normalize_plot_config(&raw),
            Err(PlotConfigError::MissingSection("plot"))
        );
    }
}
