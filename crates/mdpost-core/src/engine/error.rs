use crate::core::io::statedata::StateDataError;
use crate::core::md::MdConfigError;
use crate::core::plotting::ticks::TicksError;
use crate::engine::normalize::PlotConfigError;
use crate::engine::selection::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("frame selection failed: {source}")]
    Selection {
        #[from]
        source: SelectionError,
    },

    #[error("plot configuration error: {source}")]
    PlotConfig {
        #[from]
        source: PlotConfigError,
    },

    #[error("simulation configuration error: {source}")]
    MdConfig {
        #[from]
        source: MdConfigError,
    },

    #[error("tick layout failed: {source}")]
    Ticks {
        #[from]
        source: TicksError,
    },

    #[error("state data I/O failed: {source}")]
    StateData {
        #[from]
        source: StateDataError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
