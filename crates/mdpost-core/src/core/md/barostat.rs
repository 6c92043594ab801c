use super::options::{bool_or, optional_i64, required_f64, required_f64_triple, required_str};
use super::{MdConfigError, PROVIDER_OPENMM, ProviderSection};

/// How the membrane barostat treats the x- and y-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyMode {
    XyIsotropic,
    XyAnisotropic,
}

/// How the membrane barostat treats the z-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZMode {
    ZFree,
    ZFixed,
    ConstantVolume,
}

/// A barostat selection, resolved and validated.
///
/// Pressures are in bar, surface tensions in bar*nm, temperatures in kelvin.
#[derive(Debug, Clone, PartialEq)]
pub enum Barostat {
    MonteCarlo {
        pressure: f64,
        temperature: f64,
        /// Attempt frequency for Monte Carlo pressure changes (steps).
        frequency: Option<i64>,
        force_group: Option<i64>,
        random_number_seed: Option<i64>,
    },
    MonteCarloAnisotropic {
        /// Per-axis target pressure.
        pressure: [f64; 3],
        temperature: f64,
        scale_x: bool,
        scale_y: bool,
        scale_z: bool,
        frequency: Option<i64>,
        force_group: Option<i64>,
        random_number_seed: Option<i64>,
    },
    MonteCarloMembrane {
        pressure: f64,
        surface_tension: f64,
        temperature: f64,
        xy_mode: XyMode,
        z_mode: ZMode,
        frequency: Option<i64>,
        force_group: Option<i64>,
        random_number_seed: Option<i64>,
    },
}

impl Barostat {
    pub fn name(&self) -> &'static str {
        match self {
            Barostat::MonteCarlo { .. } => "MonteCarloBarostat",
            Barostat::MonteCarloAnisotropic { .. } => "MonteCarloAnisotropicBarostat",
            Barostat::MonteCarloMembrane { .. } => "MonteCarloMembraneBarostat",
        }
    }

    /// Resolves a raw `barostat` section into a validated selection.
    pub fn resolve(section: &ProviderSection) -> Result<Self, MdConfigError> {
        if section.is_from != PROVIDER_OPENMM {
            return Err(MdConfigError::UnsupportedProvider {
                kind: "barostat",
                provider: section.is_from.clone(),
            });
        }

        let options = &section.options;
        match section.name.as_str() {
            "MonteCarloBarostat" => {
                let object = "MonteCarloBarostat";
                Ok(Barostat::MonteCarlo {
                    pressure: required_f64(options, object, "pressure")?,
                    temperature: required_f64(options, object, "temperature")?,
                    frequency: optional_i64(options, object, "frequency")?,
                    force_group: optional_i64(options, object, "force_group")?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            "MonteCarloAnisotropicBarostat" => {
                let object = "MonteCarloAnisotropicBarostat";
                Ok(Barostat::MonteCarloAnisotropic {
                    pressure: required_f64_triple(options, object, "pressure")?,
                    temperature: required_f64(options, object, "temperature")?,
                    scale_x: bool_or(options, object, "scale_x", true)?,
                    scale_y: bool_or(options, object, "scale_y", true)?,
                    scale_z: bool_or(options, object, "scale_z", true)?,
                    frequency: optional_i64(options, object, "frequency")?,
                    force_group: optional_i64(options, object, "force_group")?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            "MonteCarloMembraneBarostat" => {
                let object = "MonteCarloMembraneBarostat";
                let xy_mode = match required_str(options, object, "xy_mode")? {
                    "XYIsotropic" => XyMode::XyIsotropic,
                    "XYAnisotropic" => XyMode::XyAnisotropic,
                    _ => {
                        return Err(MdConfigError::InvalidOption {
                            object,
                            option: "xy_mode",
                            expected: "'XYIsotropic' or 'XYAnisotropic'",
                        });
                    }
                };
                let z_mode = match required_str(options, object, "z_mode")? {
                    "ZFree" => ZMode::ZFree,
                    "ZFixed" => ZMode::ZFixed,
                    "ConstantVolume" => ZMode::ConstantVolume,
                    _ => {
                        return Err(MdConfigError::InvalidOption {
                            object,
                            option: "z_mode",
                            expected: "'ZFree', 'ZFixed', or 'ConstantVolume'",
                        });
                    }
                };
                Ok(Barostat::MonteCarloMembrane {
                    pressure: required_f64(options, object, "pressure")?,
                    surface_tension: required_f64(options, object, "surface_tension")?,
                    temperature: required_f64(options, object, "temperature")?,
                    xy_mode,
                    z_mode,
                    frequency: optional_i64(options, object, "frequency")?,
                    force_group: optional_i64(options, object, "force_group")?,
                    random_number_seed: optional_i64(options, object, "random_number_seed")?,
                })
            }
            other => Err(MdConfigError::UnsupportedName {
                kind: "barostat",
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod barostat_tests {
    use super::*;

    fn section(name: &str, options: &str) -> ProviderSection {
        ProviderSection {
            name: name.to_string(),
            is_from: "openmm".to_string(),
            options: toml::from_str(options).unwrap(),
        }
    }

    #[test]
    fn monte_carlo_resolves_with_required_options() {
        let section = section("MonteCarloBarostat", "pressure = 1.0\ntemperature = 300");
        let barostat = Barostat::resolve(&section).unwrap();
        assert_eq!(
            barostat,
            Barostat::MonteCarlo {
                pressure: 1.0,
                temperature: 300.0,
                frequency: None,
                force_group: None,
                random_number_seed: None,
            }
        );
    }

    #[test]
    fn anisotropic_takes_a_pressure_triple_and_axis_defaults() {
        let section = section(
            "MonteCarloAnisotropicBarostat",
            "pressure = [1.0, 1.0, 2.0]\ntemperature = 300\nscale_z = false",
        );
        let barostat = Barostat::resolve(&section).unwrap();
        let Barostat::MonteCarloAnisotropic {
            pressure,
            scale_x,
            scale_y,
            scale_z,
            ..
        } = barostat
        else {
            panic!("expected an anisotropic barostat");
        };
        assert_eq!(pressure, [1.0, 1.0, 2.0]);
        assert!(scale_x);
        assert!(scale_y);
        assert!(!scale_z);
    }

    #[test]
    fn membrane_modes_parse_from_their_literal_names() {
        let section = section(
            "MonteCarloMembraneBarostat",
            "pressure = 1.0\nsurface_tension = 0.0\ntemperature = 310\nxy_mode = \"XYIsotropic\"\nz_mode = \"ZFree\"",
        );
        let barostat = Barostat::resolve(&section).unwrap();
        assert!(matches!(
            barostat,
            Barostat::MonteCarloMembrane {
                xy_mode: XyMode::XyIsotropic,
                z_mode: ZMode::ZFree,
                ..
            }
        ));
    }

    #[test]
    fn membrane_rejects_unknown_modes() {
        let section = section(
            "MonteCarloMembraneBarostat",
            "pressure = 1.0\nsurface_tension = 0.0\ntemperature = 310\nxy_mode = \"XYFree\"\nz_mode = \"ZFree\"",
        );
        assert_eq!(
            Barostat::resolve(&section),
            Err(MdConfigError::InvalidOption {
                object: "MonteCarloMembraneBarostat",
                option: "xy_mode",
                expected: "'XYIsotropic' or 'XYAnisotropic'",
            })
        );
    }
}
