//! Typed models of the simulation parameters a configuration document can
//! select.
//!
//! A configuration document names an integrator, thermostat, or barostat by
//! provider and name and supplies a flat options block. These modules resolve
//! such sections into closed enums with one exhaustive-match constructor per
//! kind, so an unsupported provider or name is a typed error and every
//! variant's required options are enforced at resolution time. Scalar options
//! are plain numbers documented with their unit; attaching unit objects is
//! the simulation engine's concern.

pub mod barostat;
pub mod integrator;
pub(crate) mod options;
pub mod system;
pub mod thermostat;

use serde::Deserialize;
use thiserror::Error;
use toml::Table;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum MdConfigError {
    #[error("'{option}' must be defined to use '{object}'")]
    MissingOption {
        object: &'static str,
        option: &'static str,
    },

    #[error("'{option}' for '{object}' is invalid: expected {expected}")]
    InvalidOption {
        object: &'static str,
        option: &'static str,
        expected: &'static str,
    },

    #[error("no {kind}s from '{provider}' are supported")]
    UnsupportedProvider {
        kind: &'static str,
        provider: String,
    },

    #[error("the '{name}' {kind} has not been implemented yet or does not exist")]
    UnsupportedName { kind: &'static str, name: String },
}

/// A raw provider-backed selection as it appears in a configuration
/// document: which object to construct, where it comes from, and the options
/// to construct it with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSection {
    pub name: String,
    pub is_from: String,
    #[serde(default)]
    pub options: Table,
}

pub(crate) const PROVIDER_OPENMM: &str = "openmm";
