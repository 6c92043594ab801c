//! Configuration-tree primitives.
//!
//! Configuration documents are nested string-keyed tables ([`toml::Table`]).
//! [`merge`] implements the left-biased recursive merge used to fold a shared
//! `general` block underneath per-plot blocks; [`sections`] holds the fixed
//! per-section denylists applied before a block is forwarded to the rendering
//! layer.

pub mod merge;
pub mod sections;
