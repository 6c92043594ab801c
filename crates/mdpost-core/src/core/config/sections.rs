use phf::phf_set;
use toml::Table;

// Keys that must not be forwarded to the rendering layer. One fixed set per
// recognized section; forwarding any of these would collide with arguments
// the rendering call supplies itself.

static OUTPUT_DENYLIST: phf::Set<&'static str> = phf_set! {
    "fname",
    "format",
    "bbox_extra_artists",
    "pil_kwargs",
};

static TITLE_DENYLIST: phf::Set<&'static str> = phf_set! {
    "clip_box",
    "clip_path",
    "figure",
    "path_effects",
    "text",
    "transform",
};

static LINEPLOT_DENYLIST: phf::Set<&'static str> = phf_set! {
    "x",
    "y",
    "data",
    "agg_filter",
    "clip_box",
    "clip_path",
    "figure",
    "label",
    "path_effects",
    "picker",
    "transform",
    "xdata",
    "ydata",
};

static AXIS_LABEL_DENYLIST: phf::Set<&'static str> = phf_set! {
    "clip_box",
    "clip_path",
    "figure",
    "label",
    "path_effects",
    "text",
    "transform",
};

static AXIS_TICKLABELS_DENYLIST: phf::Set<&'static str> = phf_set! {
    "labels",
    "clip_box",
    "clip_path",
    "figure",
    "label",
    "path_effects",
    "text",
    "transform",
};

/// A recognized configuration section with a fixed denylist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotSection {
    Output,
    Title,
    Lineplot,
    AxisLabel,
    AxisTickLabels,
}

impl PlotSection {
    pub fn denylist(&self) -> &'static phf::Set<&'static str> {
        match self {
            PlotSection::Output => &OUTPUT_DENYLIST,
            PlotSection::Title => &TITLE_DENYLIST,
            PlotSection::Lineplot => &LINEPLOT_DENYLIST,
            PlotSection::AxisLabel => &AXIS_LABEL_DENYLIST,
            PlotSection::AxisTickLabels => &AXIS_TICKLABELS_DENYLIST,
        }
    }
}

/// Returns a copy of `section` without the keys in `denylist`.
///
/// Absent keys are not an error; the input is not mutated.
pub fn filter_section(section: &Table, denylist: &phf::Set<&'static str>) -> Table {
    let mut filtered = Table::new();
    for (key, value) in section {
        if !denylist.contains(key.as_str()) {
            filtered.insert(key.clone(), value.clone());
        }
    }
    filtered
}
