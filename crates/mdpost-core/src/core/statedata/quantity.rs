use phf::phf_map;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QuantityError {
    #[error("'{0}' is not a supported quantity identifier")]
    InvalidQuantity(String),
}

/// A physical quantity recorded per step in a state-data file.
///
/// The set is closed: every supported quantity maps to exactly one column
/// label, and unknown identifiers fail to parse instead of reaching the
/// lookup stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Step,
    Time,
    PotentialEnergy,
    KineticEnergy,
    TotalEnergy,
    Temperature,
    BoxVolume,
    Density,
    Mass,
}

static IDENTIFIERS: phf::Map<&'static str, Quantity> = phf_map! {
    "step" => Quantity::Step,
    "time" => Quantity::Time,
    "potential_energy" => Quantity::PotentialEnergy,
    "kinetic_energy" => Quantity::KineticEnergy,
    "total_energy" => Quantity::TotalEnergy,
    "temperature" => Quantity::Temperature,
    "box_volume" => Quantity::BoxVolume,
    "density" => Quantity::Density,
    "mass" => Quantity::Mass,
};

impl Quantity {
    pub const ALL: [Quantity; 9] = [
        Quantity::Step,
        Quantity::Time,
        Quantity::PotentialEnergy,
        Quantity::KineticEnergy,
        Quantity::TotalEnergy,
        Quantity::Temperature,
        Quantity::BoxVolume,
        Quantity::Density,
        Quantity::Mass,
    ];

    /// The semantic identifier used in configuration documents and method
    /// names.
    pub fn identifier(&self) -> &'static str {
        match self {
            Quantity::Step => "step",
            Quantity::Time => "time",
            Quantity::PotentialEnergy => "potential_energy",
            Quantity::KineticEnergy => "kinetic_energy",
            Quantity::TotalEnergy => "total_energy",
            Quantity::Temperature => "temperature",
            Quantity::BoxVolume => "box_volume",
            Quantity::Density => "density",
            Quantity::Mass => "mass",
        }
    }

    /// The literal column label this quantity carries in state-data files.
    pub fn column_label(&self) -> &'static str {
        match self {
            Quantity::Step => "Step",
            Quantity::Time => "Time (ps)",
            Quantity::PotentialEnergy => "Potential Energy (kJ/mole)",
            Quantity::KineticEnergy => "Kinetic Energy (kJ/mole)",
            Quantity::TotalEnergy => "Total Energy (kJ/mole)",
            Quantity::Temperature => "Temperature (K)",
            Quantity::BoxVolume => "Box Volume (nm^3)",
            Quantity::Density => "Density (g/mL)",
            Quantity::Mass => "Mass",
        }
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IDENTIFIERS
            .get(s)
            .copied()
            .ok_or_else(|| QuantityError::InvalidQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
