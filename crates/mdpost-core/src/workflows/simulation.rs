use crate::core::md::barostat::Barostat;
use crate::core::md::integrator::Integrator;
use crate::core::md::system::{MinimizationSection, RunSection, SolvationSection, SystemSection};
use crate::core::md::thermostat::Thermostat;
use crate::core::md::ProviderSection;
use crate::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use toml::Table;
use tracing::{info, instrument};

/// A simulation configuration document as written: provider-backed sections
/// are still raw name/provider/options triples, reporter sections are opaque
/// option blocks forwarded to the engine layer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawSimulationConfig {
    pub system: Option<SystemSection>,
    pub solvation: Option<SolvationSection>,
    pub minimization: Option<MinimizationSection>,
    pub integrator: Option<ProviderSection>,
    pub thermostat: Option<ProviderSection>,
    pub barostat: Option<ProviderSection>,
    pub run: Option<RunSection>,
    pub trajectory: Option<Table>,
    pub state_data: Option<Table>,
    pub checkpoint: Option<Table>,
}

/// A simulation configuration with every provider-backed section resolved
/// into its validated, typed selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub system: Option<SystemSection>,
    pub solvation: Option<SolvationSection>,
    pub minimization: Option<MinimizationSection>,
    pub integrator: Option<Integrator>,
    pub thermostat: Option<Thermostat>,
    pub barostat: Option<Barostat>,
    pub run: Option<RunSection>,
    pub trajectory: Option<Table>,
    pub state_data: Option<Table>,
    pub checkpoint: Option<Table>,
}

/// Resolves the provider-backed sections of a raw configuration.
///
/// # Errors
///
/// Fails when any present `integrator`, `thermostat`, or `barostat` section
/// names an unsupported provider or object, or misses a required option.
pub fn resolve_simulation_config(
    raw: RawSimulationConfig,
) -> Result<SimulationConfig, EngineError> {
    let integrator = raw
        .integrator
        .as_ref()
        .map(Integrator::resolve)
        .transpose()?;
    let thermostat = raw
        .thermostat
        .as_ref()
        .map(Thermostat::resolve)
        .transpose()?;
    let barostat = raw.barostat.as_ref().map(Barostat::resolve).transpose()?;

    Ok(SimulationConfig {
        system: raw.system,
        solvation: raw.solvation,
        minimization: raw.minimization,
        integrator,
        thermostat,
        barostat,
        run: raw.run,
        trajectory: raw.trajectory,
        state_data: raw.state_data,
        checkpoint: raw.checkpoint,
    })
}

/// Loads a simulation configuration document and resolves every
/// provider-backed section into its typed selection.
#[instrument(level = "info", skip_all)]
pub fn load_simulation_config(path: impl AsRef<Path>) -> Result<SimulationConfig, EngineError> {
    let text = std::fs::read_to_string(path)?;
    let raw: RawSimulationConfig = toml::from_str(&text)?;
    let config = resolve_simulation_config(raw)?;
    if let Some(integrator) = &config.integrator {
        info!(integrator = integrator.name(), "integrator resolved");
    }
    Ok(config)
}

#[cfg(test)]
mod simulation_workflow_tests {
    use super::*;
    use crate::core::md::MdConfigError;
    use crate::core::md::system::NonbondedMethod;

    const CONFIG: &str = r#"
[system]
nonbondedMethod = "PME"
nonbondedCutoff = 1.0
constraints = "HBonds"

[solvation]
padding = 1.0
ionicStrength = 0.15

[integrator]
name = "LangevinMiddleIntegrator"
is_from = "openmm"

[integrator.options]
temperature = 300
friction_coeff = 1.0
step_size = 0.002

[barostat]
name = "MonteCarloBarostat"
is_from = "openmm"

[barostat.options]
pressure = 1.0
temperature = 300

[run]
n_steps = 500000

[state_data]
reportInterval = 1000
"#;

    #[test]
    fn full_document_resolves_every_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simulation.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let config = load_simulation_config(&path).unwrap();
        assert_eq!(
            config.system.as_ref().unwrap().nonbonded_method,
            Some(NonbondedMethod::PME)
        );
        assert_eq!(
            config.integrator.as_ref().unwrap().name(),
            "LangevinMiddleIntegrator"
        );
        assert!(matches!(
            config.barostat,
            Some(Barostat::MonteCarlo { pressure, .. }) if pressure == 1.0
        ));
        assert!(config.thermostat.is_none());
        assert_eq!(config.run.as_ref().unwrap().n_steps, 500_000);
        assert!(config.state_data.is_some());
    }

    #[test]
    fn unsupported_integrator_surfaces_as_a_typed_error() {
        let raw = RawSimulationConfig {
            integrator: Some(ProviderSection {
                name: "CustomIntegrator".to_string(),
                is_from: "openmm".to_string(),
                options: Table::new(),
            }),
            ..Default::default()
        };
        let result = resolve_simulation_config(raw);
        assert!(matches!(
            result,
            Err(EngineError::MdConfig {
                source: MdConfigError::UnsupportedName { .. }
            })
        ));
    }
}
