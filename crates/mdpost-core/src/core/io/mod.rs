//! Reading state-data files and writing selected frames.

pub mod statedata;
