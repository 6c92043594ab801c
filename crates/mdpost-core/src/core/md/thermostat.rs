use super::options::{optional_i64, required_f64};
use super::{MdConfigError, PROVIDER_OPENMM, ProviderSection};

/// A thermostat selection, resolved and validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Thermostat {
    Andersen {
        /// Target temperature (K).
        temperature: f64,
        /// Heat-bath collision frequency (ps^-1).
        collision_frequency: f64,
        force_group: Option<i64>,
        random_number_seed: Option<i64>,
    },
}

impl Thermostat {
    pub fn name(&self) -> &'static str {
        match self {
            Thermostat::Andersen { .. } => "AndersenThermostat",
        }
    }

    /// Resolves a raw `thermostat` section into a validated selection.
    pub fn resolve(section: &ProviderSection) -> Result<Self, MdConfigError> {
        if section.is_from != PROVIDER_OPENMM {
            return Err(MdConfigError::UnsupportedProvider {
                kind: "thermostat",
                provider: section.is_from.clone(),
            });
        }

        let options = &section.options;
        match section.name.as_str() {
            "AndersenThermostat" => {
                let object = "AndersenThermostat";
                Ok(Thermostat::Andersen {
                    temperature: required_f64(options, object, "temperature")?,
                    collision_frequency: required_f64(options, object, "collision_frequency")?,
                    force_group: optional_i64(options, object, "force_group")?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            other => Err(MdConfigError::UnsupportedName {
                kind: "thermostat",
                name: other.to_string(),
            }),
        }
    }
}
