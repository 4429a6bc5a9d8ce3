// Core types shared across the universe engine.
//
// Defines display colors (`Rgb`), the star hue families, the three orbital
// distance bands, the atmosphere set, and the derived star classification.
// All types derive `Serialize` and `Deserialize` so callers can snapshot
// query results.
//
// **Critical constraint: determinism.** Enumerations indexed by ranged
// draws expose their entry count (`Atmosphere::ALL`) so the draw range and
// the table size stay in lock-step. A mismatch is a programming defect,
// surfaced by a panic, never a recoverable condition.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Display color
// ---------------------------------------------------------------------------

/// An RGB display color. The engine never draws; it hands colors to the
/// rendering layer as plain data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ---------------------------------------------------------------------------
// Star hue families and classification
// ---------------------------------------------------------------------------

/// Hue family of a star color. The star palette groups its 11 entries into
/// these four families; the family feeds the classification label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HueFamily {
    White,
    Blue,
    Red,
    Brown,
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HueFamily::White => "White",
            HueFamily::Blue => "Blue",
            HueFamily::Red => "Red",
            HueFamily::Brown => "Brown",
        };
        write!(f, "{label}")
    }
}

/// Derived star classification.
///
/// The size tier takes precedence over the hue: a supergiant is just
/// "Supergiant", never "Blue Supergiant". Giants and dwarfs keep their
/// hue family in the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarClass {
    Supergiant,
    Giant(HueFamily),
    Dwarf(HueFamily),
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarClass::Supergiant => write!(f, "Supergiant"),
            StarClass::Giant(hue) => write!(f, "{hue} Giant"),
            StarClass::Dwarf(hue) => write!(f, "{hue} Dwarf"),
        }
    }
}

// ---------------------------------------------------------------------------
// Orbital bands
// ---------------------------------------------------------------------------

/// One of the three discrete orbital distance bands. Color palette slice
/// and life odds are keyed off the band, not the raw distance value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitBand {
    Near,
    Mid,
    Far,
}

impl OrbitBand {
    /// Map a 1-based tier draw to a band. Panics on any other tier — the
    /// draw range and this mapping must stay in lock-step.
    pub fn from_tier(tier: u32) -> Self {
        match tier {
            1 => OrbitBand::Near,
            2 => OrbitBand::Mid,
            3 => OrbitBand::Far,
            _ => panic!("orbit tier out of range: {tier}"),
        }
    }

    /// Orbital distance of this band. Always exactly 50, 100, or 150.
    pub const fn distance(self) -> f64 {
        match self {
            OrbitBand::Near => 50.0,
            OrbitBand::Mid => 100.0,
            OrbitBand::Far => 150.0,
        }
    }

    /// Habitability caption shown by info panels.
    pub const fn label(self) -> &'static str {
        match self {
            OrbitBand::Near => "Too close",
            OrbitBand::Mid => "Optimal",
            OrbitBand::Far => "Too far",
        }
    }
}

// ---------------------------------------------------------------------------
// Atmospheres
// ---------------------------------------------------------------------------

/// Atmosphere descriptor of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atmosphere {
    None,
    CarbonDioxide,
    Oxygen,
    Helium,
    Hydrogen,
    Methane,
}

impl Atmosphere {
    /// All atmospheres in draw order. The generator indexes this table
    /// with a draw ranged over `ALL.len()`, so adding or removing a
    /// variant automatically widens or narrows the draw.
    pub const ALL: [Atmosphere; 6] = [
        Atmosphere::None,
        Atmosphere::CarbonDioxide,
        Atmosphere::Oxygen,
        Atmosphere::Helium,
        Atmosphere::Hydrogen,
        Atmosphere::Methane,
    ];
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Atmosphere::None => "None",
            Atmosphere::CarbonDioxide => "CO2",
            Atmosphere::Oxygen => "Oxygen",
            Atmosphere::Helium => "Helium",
            Atmosphere::Hydrogen => "Hydrogen",
            Atmosphere::Methane => "Methane",
        };
        write!(f, "{label}")
    }
}
