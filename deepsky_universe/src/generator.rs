// Star system derivation: one construction pass per query.
//
// The generator is a pure function `(x, y, detail, config) -> StarSystem`.
// It seeds a private `SectorRng` from the coordinates and walks a fixed
// draw sequence; the detail level only decides how far down the sequence
// the pass goes. No state survives the call.
//
// Draw order is part of the output contract. The sequence for a present
// system is: existence, star color index, star diameter, then per planet:
// band tier, diameter, atmosphere, color index, life roll, ring roll, moon
// count, moon diameters. Names never touch this stream — they come from
// `deepsky_names` with their own seeds — so reordering name generation
// cannot shift the universe.
//
// **Critical constraint: determinism.** Identical `(x, y, detail, config)`
// must produce bit-identical output. Do not insert, remove, or reorder
// draws.

use crate::config::UniverseConfig;
use crate::palette::{STAR_COLORS, band_colors};
use crate::system::{Planet, StarSystem};
use crate::types::{Atmosphere, HueFamily, OrbitBand, StarClass};
use deepsky_names::generate_name;
use deepsky_prng::SectorRng;
use smallvec::SmallVec;

/// How much of a system to derive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detail {
    /// Existence and star attributes only. Cheap enough to run once per
    /// visible sector per frame.
    Overview,
    /// Full planetary retinue with moons. Run once per selection.
    Full,
}

/// Derive a star's classification from its hue family and diameter.
///
/// The size tier beats the hue for the top class: above the supergiant
/// threshold the label is "Supergiant" regardless of color.
pub fn classify(family: HueFamily, diameter: f64, config: &UniverseConfig) -> StarClass {
    if diameter > config.supergiant_threshold {
        StarClass::Supergiant
    } else if diameter > config.giant_threshold {
        StarClass::Giant(family)
    } else {
        StarClass::Dwarf(family)
    }
}

/// Generate the star system at world coordinates `(x, y)`.
///
/// Most coordinates yield `StarSystem::absent()` after a single draw. For
/// present systems, `Detail::Overview` stops after the star attributes and
/// allocates nothing beyond the name; `Detail::Full` populates the planet
/// sequence in generation order.
pub fn generate_system(x: u32, y: u32, detail: Detail, config: &UniverseConfig) -> StarSystem {
    let mut rng = SectorRng::from_coords(x, y);

    if !rng.one_in(config.star_odds) {
        return StarSystem::absent();
    }

    let swatch = STAR_COLORS[rng.range_u32(0, STAR_COLORS.len() as u32) as usize];
    let (diameter_min, diameter_max) = config.star_diameter_range;
    let star_diameter = f64::from(rng.range_u32(diameter_min, diameter_max));
    let name = generate_name(x.wrapping_add(y));
    let star_class = classify(swatch.family, star_diameter, config);

    let mut system = StarSystem {
        exists: true,
        star_diameter,
        star_class: Some(star_class),
        name,
        star_color: swatch.color,
        planets: Vec::new(),
    };

    if detail == Detail::Overview {
        return system;
    }

    let planet_count = rng.range_u32(0, config.max_planets);
    system.planets.reserve_exact(planet_count as usize);
    for index in 0..planet_count {
        system.planets.push(generate_planet(&mut rng, x, y, index, config));
    }

    system
}

/// Generate the planet at `index` within the system's draw stream.
///
/// The name seed is offset by `index + 1` so planets collide with neither
/// the star's name (offset 0) nor their siblings'.
fn generate_planet(
    rng: &mut SectorRng,
    x: u32,
    y: u32,
    index: u32,
    config: &UniverseConfig,
) -> Planet {
    let name = generate_name(x.wrapping_add(y).wrapping_add(index + 1));

    let band = OrbitBand::from_tier(rng.range_u32(1, 4));
    let (diameter_min, diameter_max) = config.planet_diameter_range;
    let diameter = rng.range_f64(diameter_min, diameter_max);
    let atmosphere =
        Atmosphere::ALL[rng.range_u32(0, Atmosphere::ALL.len() as u32) as usize];

    let colors = band_colors(band);
    let color = colors[rng.range_u32(0, colors.len() as u32) as usize];
    let life = rng.one_in(config.life_odds(band));
    let ring = rng.one_in(config.ring_odds);

    let moon_count = rng.range_u32(0, config.max_moons);
    let (moon_min, moon_max) = config.moon_diameter_range;
    let mut moons = SmallVec::new();
    for _ in 0..moon_count {
        moons.push(rng.range_f64(moon_min, moon_max));
    }

    Planet {
        name,
        band,
        diameter,
        atmosphere,
        life,
        ring,
        color,
        moons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UniverseConfig {
        UniverseConfig::default()
    }

    #[test]
    fn generation_is_deterministic() {
        let config = config();
        for x in 0..40 {
            for y in 0..40 {
                let a = generate_system(x, y, Detail::Full, &config);
                let b = generate_system(x, y, Detail::Full, &config);
                assert_eq!(a, b, "non-deterministic output at ({x}, {y})");
            }
        }
    }

    #[test]
    fn overview_and_full_agree_on_star_attributes() {
        let config = config();
        for x in 0..40 {
            for y in 0..40 {
                let coarse = generate_system(x, y, Detail::Overview, &config);
                let full = generate_system(x, y, Detail::Full, &config);
                assert_eq!(coarse.exists, full.exists);
                assert_eq!(coarse.star_diameter, full.star_diameter);
                assert_eq!(coarse.star_class, full.star_class);
                assert_eq!(coarse.name, full.name);
                assert_eq!(coarse.star_color, full.star_color);
                assert!(coarse.planets.is_empty());
            }
        }
    }

    #[test]
    fn absent_systems_carry_only_defaults() {
        let config = config();
        // (0, 0) deterministically holds no star under the reference stream.
        let sys = generate_system(0, 0, Detail::Full, &config);
        assert_eq!(sys, StarSystem::absent());
    }

    #[test]
    fn planet_distances_close_over_the_three_bands() {
        let config = config();
        let mut seen = 0;
        for x in 0..60 {
            for y in 0..60 {
                let sys = generate_system(x, y, Detail::Full, &config);
                for planet in &sys.planets {
                    seen += 1;
                    let d = planet.distance();
                    assert!(
                        d == 50.0 || d == 100.0 || d == 150.0,
                        "planet distance {d} outside the three bands"
                    );
                }
            }
        }
        assert!(seen > 100, "sample too small to be meaningful: {seen}");
    }

    #[test]
    fn moon_counts_stay_bounded() {
        let config = config();
        for x in 0..60 {
            for y in 0..60 {
                let sys = generate_system(x, y, Detail::Full, &config);
                assert!((sys.planets.len() as u32) < config.max_planets);
                for planet in &sys.planets {
                    assert!(
                        (planet.moons.len() as u32) < config.max_moons,
                        "moon count {} out of range",
                        planet.moons.len()
                    );
                }
            }
        }
    }

    #[test]
    fn planet_colors_come_from_the_band_slice() {
        let config = config();
        for x in 0..40 {
            for y in 0..40 {
                let sys = generate_system(x, y, Detail::Full, &config);
                for planet in &sys.planets {
                    assert!(
                        band_colors(planet.band).contains(&planet.color),
                        "planet color outside its band's palette slice"
                    );
                }
            }
        }
    }

    #[test]
    fn supergiant_overrides_hue() {
        let config = config();
        for family in [
            HueFamily::White,
            HueFamily::Blue,
            HueFamily::Red,
            HueFamily::Brown,
        ] {
            assert_eq!(classify(family, 55.0, &config), StarClass::Supergiant);
        }
    }

    #[test]
    fn classification_tiers() {
        let config = config();
        assert_eq!(
            classify(HueFamily::Red, 35.0, &config).to_string(),
            "Red Giant"
        );
        assert_eq!(
            classify(HueFamily::Blue, 20.0, &config).to_string(),
            "Blue Dwarf"
        );
        // Boundary: exactly at a threshold falls to the lower tier.
        assert_eq!(
            classify(HueFamily::White, 50.0, &config).to_string(),
            "White Giant"
        );
        assert_eq!(
            classify(HueFamily::White, 30.0, &config).to_string(),
            "White Dwarf"
        );
    }

    #[test]
    fn config_odds_feed_existence() {
        // With 1-in-1 odds no roll can come up 1, so nothing exists;
        // the roll compares a draw in [0, 1) against 1.
        let mut config = config();
        config.star_odds = 1;
        for x in 0..20 {
            for y in 0..20 {
                assert!(!generate_system(x, y, Detail::Overview, &config).exists);
            }
        }
    }
}
