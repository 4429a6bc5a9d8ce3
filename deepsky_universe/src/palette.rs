// Fixed color palettes for stars and planets.
//
// Two constant tables: 11 star colors grouped into four hue families, and
// 17 planet colors partitioned into three orbital-band slices. Table order
// and length are part of the generated-output contract — the generator
// indexes these tables with draws ranged over the table (or slice) length,
// so every entry is reachable and a size change automatically widens or
// narrows the draw.
//
// Color values follow the classic 8-bit palette convention: full, dark
// (half) and very dark (quarter) variants of the primary hues.

use crate::types::{HueFamily, OrbitBand, Rgb};

const WHITE: Rgb = Rgb::new(255, 255, 255);
const CYAN: Rgb = Rgb::new(0, 255, 255);
const BLUE: Rgb = Rgb::new(0, 0, 255);
const DARK_BLUE: Rgb = Rgb::new(0, 0, 128);
const VERY_DARK_BLUE: Rgb = Rgb::new(0, 0, 64);
const RED: Rgb = Rgb::new(255, 0, 0);
const DARK_RED: Rgb = Rgb::new(128, 0, 0);
const VERY_DARK_RED: Rgb = Rgb::new(64, 0, 0);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const DARK_YELLOW: Rgb = Rgb::new(128, 128, 0);
const VERY_DARK_YELLOW: Rgb = Rgb::new(64, 64, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const DARK_GREEN: Rgb = Rgb::new(0, 128, 0);
const DARK_CYAN: Rgb = Rgb::new(0, 128, 128);
const VERY_DARK_CYAN: Rgb = Rgb::new(0, 64, 64);
const MAGENTA: Rgb = Rgb::new(255, 0, 255);
const GREY: Rgb = Rgb::new(192, 192, 192);
const DARK_GREY: Rgb = Rgb::new(128, 128, 128);

/// A star palette entry: display color plus the hue family that feeds the
/// classification label.
#[derive(Clone, Copy, Debug)]
pub struct StarSwatch {
    pub color: Rgb,
    pub family: HueFamily,
}

const fn swatch(color: Rgb, family: HueFamily) -> StarSwatch {
    StarSwatch { color, family }
}

/// Star color palette: 11 entries in four hue families. White is weighted
/// three-fold; brown carries two shades of the same color.
pub const STAR_COLORS: [StarSwatch; 11] = [
    swatch(WHITE, HueFamily::White),
    swatch(WHITE, HueFamily::White),
    swatch(WHITE, HueFamily::White),
    swatch(CYAN, HueFamily::Blue),
    swatch(BLUE, HueFamily::Blue),
    swatch(DARK_BLUE, HueFamily::Blue),
    swatch(RED, HueFamily::Red),
    swatch(DARK_RED, HueFamily::Red),
    swatch(YELLOW, HueFamily::Red),
    swatch(VERY_DARK_RED, HueFamily::Brown),
    swatch(VERY_DARK_RED, HueFamily::Brown),
];

/// Planet color palette: 17 entries partitioned into band slices.
///
/// Near band (0..=4): scorched and rocky worlds. Mid band (5..=10): worlds
/// with possible water and vegetation. Far band (11..=16): frozen, rocky,
/// and gas worlds.
pub const PLANET_COLORS: [Rgb; 17] = [
    // Near
    RED,
    DARK_RED,
    DARK_YELLOW,
    GREY,
    MAGENTA,
    // Mid
    BLUE,
    DARK_BLUE,
    GREEN,
    DARK_GREEN,
    CYAN,
    DARK_CYAN,
    // Far
    WHITE,
    GREY,
    VERY_DARK_BLUE,
    VERY_DARK_CYAN,
    VERY_DARK_YELLOW,
    DARK_GREY,
];

/// The planet palette slice for an orbital band. The generator draws a
/// color index ranged over the returned slice's length.
pub fn band_colors(band: OrbitBand) -> &'static [Rgb] {
    match band {
        OrbitBand::Near => &PLANET_COLORS[0..5],
        OrbitBand::Mid => &PLANET_COLORS[5..11],
        OrbitBand::Far => &PLANET_COLORS[11..17],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_palette_family_grouping() {
        let count = |fam: HueFamily| {
            STAR_COLORS
                .iter()
                .filter(|s| s.family == fam)
                .count()
        };
        assert_eq!(STAR_COLORS.len(), 11);
        assert_eq!(count(HueFamily::White), 3);
        assert_eq!(count(HueFamily::Blue), 3);
        assert_eq!(count(HueFamily::Red), 3);
        assert_eq!(count(HueFamily::Brown), 2);
    }

    #[test]
    fn star_palette_families_are_contiguous() {
        let families: Vec<HueFamily> = STAR_COLORS.iter().map(|s| s.family).collect();
        let mut deduped = families.clone();
        deduped.dedup();
        assert_eq!(
            deduped,
            vec![
                HueFamily::White,
                HueFamily::Blue,
                HueFamily::Red,
                HueFamily::Brown
            ]
        );
    }

    #[test]
    fn band_slices_tile_the_planet_palette() {
        let near = band_colors(OrbitBand::Near);
        let mid = band_colors(OrbitBand::Mid);
        let far = band_colors(OrbitBand::Far);
        assert_eq!(near.len(), 5);
        assert_eq!(mid.len(), 6);
        assert_eq!(far.len(), 6);
        assert_eq!(near.len() + mid.len() + far.len(), PLANET_COLORS.len());
        // Slices are adjacent and in order.
        assert_eq!(near[0], PLANET_COLORS[0]);
        assert_eq!(mid[0], PLANET_COLORS[5]);
        assert_eq!(far[0], PLANET_COLORS[11]);
        assert_eq!(far[5], PLANET_COLORS[16]);
    }
}
