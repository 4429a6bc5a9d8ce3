// Data-driven generation configuration.
//
// All tunable generation parameters live here in `UniverseConfig`, loaded
// from JSON at startup or defaulted to the reference constants. The
// generator never uses magic numbers — it reads from the config. Palette
// and enumeration sizes are NOT configurable: those draws are length-locked
// to the tables they index (see `palette.rs` and `types.rs`).
//
// Odds fields follow the `1-in-N` convention: `star_odds: 20` means one
// sector in twenty holds a star.
//
// **Critical constraint: determinism.** Config values feed directly into
// the draw sequence. Two universes agree only if their configs agree.

use crate::types::OrbitBand;
use serde::{Deserialize, Serialize};

/// Top-level generation configuration. Never mutated at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// 1-in-N odds that a sector holds a star. Keeps the universe mostly
    /// empty.
    pub star_odds: u32,

    /// Star diameter draw range `[min, max)`, integer-valued.
    pub star_diameter_range: (u32, u32),

    /// Diameter above which a star is a Supergiant, hue label dropped.
    pub supergiant_threshold: f64,

    /// Diameter above which (up to the supergiant threshold) a star is a
    /// `<Hue> Giant`; at or below, a `<Hue> Dwarf`.
    pub giant_threshold: f64,

    /// Planet count draw range is `[0, max_planets)`.
    pub max_planets: u32,

    /// Planet diameter draw anchor range (see `SectorRng::range_f64` for
    /// the overshoot caveat).
    pub planet_diameter_range: (f64, f64),

    /// 1-in-N life odds for planets in the near band.
    pub life_odds_near: u32,

    /// 1-in-N life odds for planets in the mid (temperate) band.
    pub life_odds_mid: u32,

    /// 1-in-N life odds for planets in the far band.
    pub life_odds_far: u32,

    /// 1-in-N odds that a planet has a ring.
    pub ring_odds: u32,

    /// Moon count draw range is `[0, max_moons)`.
    pub max_moons: u32,

    /// Moon diameter draw anchor range.
    pub moon_diameter_range: (f64, f64),
}

impl UniverseConfig {
    /// Life odds for a band. The temperate mid band is four times as
    /// likely to carry life as the near and far bands.
    pub fn life_odds(&self, band: OrbitBand) -> u32 {
        match band {
            OrbitBand::Near => self.life_odds_near,
            OrbitBand::Mid => self.life_odds_mid,
            OrbitBand::Far => self.life_odds_far,
        }
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            star_odds: 20,
            star_diameter_range: (10, 60),
            supergiant_threshold: 50.0,
            giant_threshold: 30.0,
            max_planets: 6,
            planet_diameter_range: (4.0, 20.0),
            life_odds_near: 20,
            life_odds_mid: 5,
            life_odds_far: 20,
            ring_odds: 10,
            max_moons: 5,
            moon_diameter_range: (1.0, 5.0),
        }
    }
}
