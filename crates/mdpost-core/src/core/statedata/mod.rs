//! The observable time series recorded by a simulation engine.
//!
//! A state-data file is an ordered sequence of rows, one per recorded
//! simulation step, each carrying named scalar columns. [`quantity`] holds the
//! closed mapping from semantic quantity identifiers to the literal column
//! labels used in state-data files; [`series`] holds the in-memory series and
//! frame models.

pub mod quantity;
pub mod series;
