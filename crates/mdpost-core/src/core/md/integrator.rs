use super::options::{
    i64_or, optional_f64, optional_i64, optional_int_list, required_f64, required_int_list,
    required_pair_list,
};
use super::{MdConfigError, PROVIDER_OPENMM, ProviderSection};
use toml::{Table, Value};

/// An integrator selection, resolved and validated.
///
/// Time-like options are in picoseconds, temperatures in kelvin, friction
/// coefficients in inverse picoseconds, pair distances in nanometers.
#[derive(Debug, Clone, PartialEq)]
pub enum Integrator {
    Verlet {
        step_size: f64,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
    },
    Langevin {
        temperature: f64,
        friction_coeff: f64,
        step_size: f64,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
        random_number_seed: Option<i64>,
    },
    LangevinMiddle {
        temperature: f64,
        friction_coeff: f64,
        step_size: f64,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
        random_number_seed: Option<i64>,
    },
    NoseHoover {
        step_size: f64,
        thermostats: Vec<NoseHooverThermostat>,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
        maximum_pair_distance: Option<f64>,
    },
    Brownian {
        temperature: f64,
        friction_coeff: f64,
        step_size: f64,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
        random_number_seed: Option<i64>,
    },
    VariableVerlet {
        error_tolerance: f64,
        step_size: Option<f64>,
        maximum_step_size: Option<f64>,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
    },
    VariableLangevin {
        temperature: f64,
        friction_coeff: f64,
        error_tolerance: f64,
        step_size: Option<f64>,
        maximum_step_size: Option<f64>,
        constraint_tolerance: Option<f64>,
        integration_force_groups: Option<Vec<i64>>,
        random_number_seed: Option<i64>,
    },
}

/// One thermostat block of a Nose-Hoover integrator: either the full-system
/// thermostat or a named subsystem thermostat.
#[derive(Debug, Clone, PartialEq)]
pub struct NoseHooverThermostat {
    pub label: String,
    pub scope: NoseHooverScope,
    /// Target temperature (K).
    pub temperature: f64,
    /// Heat-bath collision frequency (ps^-1).
    pub collision_frequency: f64,
    /// Beads in the Nose-Hoover chain.
    pub chain_length: i64,
    /// Steps in the multiple-time-step chain propagation.
    pub num_mts: i64,
    /// Terms in the Yoshida-Suzuki decomposition (1, 3, 5, or 7).
    pub num_yoshida_suzuki: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoseHooverScope {
    FullSystem,
    Subsystem {
        thermostated_particles: Vec<i64>,
        thermostated_pairs: Vec<(i64, i64)>,
        /// Target temperature for each pair's relative motion (K).
        relative_temperature: f64,
        /// Heat-bath collision frequency for the pairs' relative motion
        /// (ps^-1).
        relative_collision_frequency: f64,
    },
}

impl Integrator {
    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Verlet { .. } => "VerletIntegrator",
            Integrator::Langevin { .. } => "LangevinIntegrator",
            Integrator::LangevinMiddle { .. } => "LangevinMiddleIntegrator",
            Integrator::NoseHoover { .. } => "NoseHooverIntegrator",
            Integrator::Brownian { .. } => "BrownianIntegrator",
            Integrator::VariableVerlet { .. } => "VariableVerletIntegrator",
            Integrator::VariableLangevin { .. } => "VariableLangevinIntegrator",
        }
    }

    /// Resolves a raw `integrator` section into a validated selection.
    ///
    /// # Errors
    ///
    /// Fails on unsupported providers or integrator names, on missing
    /// required options, and on options of the wrong shape.
    pub fn resolve(section: &ProviderSection) -> Result<Self, MdConfigError> {
        if section.is_from != PROVIDER_OPENMM {
            return Err(MdConfigError::UnsupportedProvider {
                kind: "integrator",
                provider: section.is_from.clone(),
            });
        }

        let options = &section.options;
        match section.name.as_str() {
            "VerletIntegrator" => {
                let object = "VerletIntegrator";
                Ok(Integrator::Verlet {
                    step_size: required_f64(options, object, "step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                })
            }
            "LangevinIntegrator" => {
                let object = "LangevinIntegrator";
                Ok(Integrator::Langevin {
                    temperature: required_f64(options, object, "temperature")?,
                    friction_coeff: required_f64(options, object, "friction_coeff")?,
                    step_size: required_f64(options, object, "step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            "LangevinMiddleIntegrator" => {
                let object = "LangevinMiddleIntegrator";
                Ok(Integrator::LangevinMiddle {
                    temperature: required_f64(options, object, "temperature")?,
                    friction_coeff: required_f64(options, object, "friction_coeff")?,
                    step_size: required_f64(options, object, "step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            "NoseHooverIntegrator" => {
                let object = "NoseHooverIntegrator";
                Ok(Integrator::NoseHoover {
                    step_size: required_f64(options, object, "step_size")?,
                    thermostats: resolve_nose_hoover_thermostats(options, object)?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                    maximum_pair_distance: optional_f64(options, object, "maximum_pair_distance")?,
                })
            }
            "BrownianIntegrator" => {
                let object = "BrownianIntegrator";
                Ok(Integrator::Brownian {
                    temperature: required_f64(options, object, "temperature")?,
                    friction_coeff: required_f64(options, object, "friction_coeff")?,
                    step_size: required_f64(options, object, "step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            "VariableVerletIntegrator" => {
                let object = "VariableVerletIntegrator";
                Ok(Integrator::VariableVerlet {
                    error_tolerance: required_f64(options, object, "error_tolerance")?,
                    step_size: optional_f64(options, object, "step_size")?,
                    maximum_step_size: optional_f64(options, object, "maximum_step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                })
            }
            "VariableLangevinIntegrator" => {
                let object = "VariableLangevinIntegrator";
                Ok(Integrator::VariableLangevin {
                    temperature: required_f64(options, object, "temperature")?,
                    friction_coeff: required_f64(options, object, "friction_coeff")?,
                    error_tolerance: required_f64(options, object, "error_tolerance")?,
                    step_size: optional_f64(options, object, "step_size")?,
                    maximum_step_size: optional_f64(options, object, "maximum_step_size")?,
                    constraint_tolerance: optional_f64(options, object, "constraint_tolerance")?,
                    integration_force_groups: optional_int_list(
                        options,
                        object,
                        "integration_force_groups",
                    )?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            other => Err(MdConfigError::UnsupportedName {
                kind: "integrator",
                name: other.to_string(),
            }),
        }
    }
}

fn resolve_nose_hoover_thermostats(
    options: &Table,
    object: &'static str,
) -> Result<Vec<NoseHooverThermostat>, MdConfigError> {
    let blocks = match options.get("thermostats") {
        None => {
            return Err(MdConfigError::MissingOption {
                object,
                option: "thermostats",
            });
        }
        Some(Value::Table(blocks)) => blocks,
        Some(_) => {
            return Err(MdConfigError::InvalidOption {
                object,
                option: "thermostats",
                expected: "a table of thermostat blocks",
            });
        }
    };

    let mut thermostats = Vec::with_capacity(blocks.len());
    for (label, block) in blocks {
        let block = match block {
            Value::Table(block) => block,
            _ => {
                return Err(MdConfigError::InvalidOption {
                    object,
                    option: "thermostats",
                    expected: "a table of thermostat blocks",
                });
            }
        };

        let scope = if label == "full_system" {
            NoseHooverScope::FullSystem
        } else {
            NoseHooverScope::Subsystem {
                thermostated_particles: required_int_list(
                    block,
                    object,
                    "thermostated_particles",
                )?,
                thermostated_pairs: required_pair_list(block, object, "thermostated_pairs")?,
                relative_temperature: required_f64(block, object, "relative_temperature")?,
                relative_collision_frequency: required_f64(
                    block,
                    object,
                    "relative_collision_frequency",
                )?,
            }
        };

        let num_yoshida_suzuki = i64_or(block, object, "num_yoshida_suzuki", 7)?;
        if !matches!(num_yoshida_suzuki, 1 | 3 | 5 | 7) {
            return Err(MdConfigError::InvalidOption {
                object,
                option: "num_yoshida_suzuki",
                expected: "one of 1, 3, 5, or 7",
            });
        }

        thermostats.push(NoseHooverThermostat {
            label: label.clone(),
            scope,
            temperature: required_f64(block, object, "temperature")?,
            collision_frequency: required_f64(block, object, "collision_frequency")?,
            chain_length: i64_or(block, object, "chain_length", 3)?,
            num_mts: i64_or(block, object, "num_mts", 3)?,
            num_yoshida_suzuki,
        });
    }
    Ok(thermostats)
}
