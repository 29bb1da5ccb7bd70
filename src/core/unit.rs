//! Mass units and the conversion table between them

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Milligrams per gram
pub const MG_PER_G: f64 = 1000.0;

/// Supported mass units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Milligrams
    #[default]
    Mg,
    /// Grams
    G,
}

impl Unit {
    /// Convert `value` expressed in `from` into `to`
    ///
    /// The table is closed over {mg, g}, so conversion never divides by zero.
    pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
        match (from, to) {
            (Unit::Mg, Unit::G) => value / MG_PER_G,
            (Unit::G, Unit::Mg) => value * MG_PER_G,
            _ => value,
        }
    }

    /// Short symbol used in output
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Mg => "mg",
            Unit::G => "g",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a unit name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit '{0}' (expected 'mg' or 'g')")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mg" => Ok(Unit::Mg),
            "g" => Ok(Unit::G),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}
