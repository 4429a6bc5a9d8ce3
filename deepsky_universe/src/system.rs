// Celestial entity records: `Planet` and `StarSystem`.
//
// Plain value types with no behavior beyond data holding — no class
// hierarchy, no update-in-place. Both are constructed fresh per query by
// `generator.rs`, handed to the caller by value, and dropped once the
// caller has extracted what it needs. Nothing is cached between queries.

use crate::types::{Atmosphere, OrbitBand, Rgb, StarClass};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A generated planet. Owned exclusively by the `StarSystem` that
/// generated it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Display name.
    pub name: String,
    /// Orbital distance band. Palette slice and life odds key off this.
    pub band: OrbitBand,
    /// Diameter, km-scale.
    pub diameter: f64,
    /// Atmosphere descriptor.
    pub atmosphere: Atmosphere,
    /// Whether the planet carries life.
    pub life: bool,
    /// Whether the planet has a ring. Low-probability.
    pub ring: bool,
    /// Display color, drawn from the band's palette slice.
    pub color: Rgb,
    /// Moon diameters in generation order. Bounded at four entries, so the
    /// inline capacity never spills to the heap.
    pub moons: SmallVec<[f64; 4]>,
}

impl Planet {
    /// Orbital distance. Always one of exactly 50, 100, or 150.
    pub fn distance(&self) -> f64 {
        self.band.distance()
    }
}

/// A generated star system — the value returned by every query.
///
/// Ephemeral: exists only for the duration of one query, never mutated
/// after construction, never shared across queries.
///
/// Invariant: when `exists` is false every other field holds its default
/// and the caller must treat the sector as empty. `star_class` is `Some`
/// if and only if `exists` is true.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    /// Whether this sector holds a star at all. Most sectors do not.
    pub exists: bool,
    /// Star diameter. Integer-valued despite the f64 carrier.
    pub star_diameter: f64,
    /// Derived classification; `None` iff the system is absent.
    pub star_class: Option<StarClass>,
    /// System name.
    pub name: String,
    /// Star display color.
    pub star_color: Rgb,
    /// Planets in generation order. Empty in coarse mode.
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// The empty-sector value: `exists` false, everything else default.
    pub fn absent() -> Self {
        Self::default()
    }
}
