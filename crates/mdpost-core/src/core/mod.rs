//! # Core Module
//!
//! Stateless data models and pure transformations shared by the rest of the
//! library.
//!
//! - **State data** ([`statedata`]) - The observable time series recorded by a
//!   simulation engine and the closed mapping from quantity identifiers to
//!   state-data column labels.
//! - **Configuration trees** ([`config`]) - Recursive left-biased merging of
//!   nested configuration tables and per-section denylist filtering.
//! - **Simulation parameters** ([`md`]) - Typed models of the integrator,
//!   thermostat, and barostat selections a configuration document can make,
//!   resolved by exhaustive-match constructors.
//! - **Plot layout** ([`plotting`]) - Axis tick positions and tick label
//!   formatting for the downstream rendering layer.
//! - **File I/O** ([`io`]) - Reading state-data files and writing selected
//!   frames.

pub mod config;
pub mod io;
pub mod md;
pub mod plotting;
pub mod statedata;
