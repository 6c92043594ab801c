use serde::Deserialize;
use toml::Table;

/// How nonbonded interactions are treated when the system is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NonbondedMethod {
    NoCutoff,
    CutoffNonPeriodic,
    CutoffPeriodic,
    Ewald,
    PME,
    LJPME,
}

/// Which bonds and angles are replaced by rigid constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Constraints {
    HBonds,
    AllBonds,
    HAngles,
}

/// The `system` section of a simulation configuration.
///
/// Only the options with a closed value set are typed; everything else is
/// forwarded to the engine layer untouched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SystemSection {
    #[serde(rename = "nonbondedMethod")]
    pub nonbonded_method: Option<NonbondedMethod>,
    /// Nonbonded cutoff distance (nm).
    #[serde(rename = "nonbondedCutoff")]
    pub nonbonded_cutoff: Option<f64>,
    pub constraints: Option<Constraints>,
    #[serde(flatten)]
    pub extra: Table,
}

/// The `solvation` section of a simulation configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SolvationSection {
    /// Minimum solvent padding around the solute (nm).
    pub padding: Option<f64>,
    /// Ionic strength of the solvent (molar).
    #[serde(rename = "ionicStrength")]
    pub ionic_strength: Option<f64>,
    #[serde(flatten)]
    pub extra: Table,
}

/// The `minimization` section of a simulation configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MinimizationSection {
    /// Convergence tolerance (kJ mol^-1 nm^-1).
    pub tolerance: Option<f64>,
    #[serde(flatten)]
    pub extra: Table,
}

/// The `run` section of a simulation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunSection {
    pub n_steps: u64,
}

#[cfg(test)]
mod system_tests {
    use super::*;

    #[test]
    fn typed_options_parse_and_extras_pass_through() {
        let section: SystemSection = toml::from_str(
            "nonbondedMethod = \"PME\"\nnonbondedCutoff = 1.0\nconstraints = \"HBonds\"\nrigidWater = true",
        )
        .unwrap();
        assert_eq!(section.nonbonded_method, Some(NonbondedMethod::PME));
        assert_eq!(section.nonbonded_cutoff, Some(1.0));
        assert_eq!(section.constraints, Some(Constraints::HBonds));
        assert_eq!(
            section.extra.get("rigidWater").and_then(|v| v.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn unknown_nonbonded_method_fails_to_parse() {
        let result: Result<SystemSection, _> = toml::from_str("nonbondedMethod = \"Reaction\"");
        assert!(result.is_err());
    }

    #[test]
    fn solvation_section_reads_its_units_as_plain_numbers() {
        let section: SolvationSection =
            toml::from_str("padding = 1.2\nionicStrength = 0.15\nmodel = \"tip3p\"").unwrap();
        assert_eq!(section.padding, Some(1.2));
        assert_eq!(section.ionic_strength, Some(0.15));
        assert_eq!(
            section.extra.get("model").and_then(|v| v.as_str()),
            Some("tip3p")
        );
    }
}
