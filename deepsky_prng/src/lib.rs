// Deterministic, portable pseudo-random number generator.
//
// Implements a 32-bit Weyl sequence hashed through two multiply-xor-fold
// rounds (after Lemire's "fastest conventional random number generator"
// construction). This is a hand-rolled implementation with zero external
// dependencies, chosen so that a given seed produces an identical draw
// sequence on every platform.
//
// This crate is the single PRNG used across the entire Deepsky project:
// `deepsky_universe` (star system derivation) and `deepsky_names` (name
// generation). By sharing one PRNG, we avoid depending on external RNG
// crates (like `rand`) and guarantee deterministic, reproducible output
// given the same seed.
//
// **Critical constraint: determinism.** Every method on `SectorRng` must
// produce identical output given the same prior state, regardless of
// platform, compiler version, or optimization level. The draw count per
// method call is fixed — `range_u32` performs exactly one draw, never a
// rejection loop — so independent consumers of the same coordinate stream
// stay aligned.

use serde::{Deserialize, Serialize};

/// Offset added to the state word before each hash (Weyl increment).
const WEYL_INCREMENT: u32 = 0xe120_fc15;
/// First multiply-fold constant. Compatibility-sensitive: changing it
/// changes every generated universe.
const FOLD_MUL_1: u64 = 0x4a39_b70d;
/// Second multiply-fold constant. Same caveat as `FOLD_MUL_1`.
const FOLD_MUL_2: u64 = 0x12fa_d5c9;

/// Weyl-multiply-fold PRNG — the project's sole source of randomness.
///
/// Each query into the universe owns its own `SectorRng`, seeded from the
/// queried coordinates, so there is no shared stream and no ordering
/// dependency between queries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectorRng {
    state: u32,
}

impl SectorRng {
    /// Create a new PRNG from a raw `u32` seed.
    ///
    /// Two `SectorRng` instances created with the same seed produce
    /// identical output sequences.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a new PRNG seeded from a pair of world coordinates.
    ///
    /// Packs the low 16 bits of each component into one 32-bit state word:
    /// `(x & 0xFFFF) << 16 | (y & 0xFFFF)`. Every coordinate pair (mod the
    /// 16-bit truncation) maps to a distinct initial state, and re-seeding
    /// with the same coordinates reproduces the same stream.
    pub fn from_coords(x: u32, y: u32) -> Self {
        Self::new((x & 0xFFFF) << 16 | (y & 0xFFFF))
    }

    /// Generate the next `u32` in the sequence.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL_INCREMENT);
        let mut tmp = u64::from(self.state) * FOLD_MUL_1;
        let folded = ((tmp >> 32) ^ tmp) as u32;
        tmp = u64::from(folded) * FOLD_MUL_2;
        ((tmp >> 32) ^ tmp) as u32
    }

    /// Generate a random integer in `[low, high)` via modulo reduction.
    ///
    /// The reduction carries the usual modulo bias for spans that do not
    /// divide 2^32. That is accepted here: one draw per call, always, so
    /// every consumer of a coordinate stream sees the same draw positions.
    ///
    /// Panics if `low >= high`.
    pub fn range_u32(&mut self, low: u32, high: u32) -> u32 {
        assert!(low < high, "range_u32: low must be less than high");
        self.next_u32() % (high - low) + low
    }

    /// Generate a random `f64` scaled into a range anchored at `low`.
    ///
    /// Computed as `next_u32() / 0x7FFF_FFFF * (high - low) + low`. The
    /// draw can exceed `0x7FFF_FFFF`, so the result lands in
    /// `[low, low + 2 * (high - low))` rather than `[low, high)`. The
    /// formula is part of the stream contract and must not be "fixed".
    ///
    /// Panics if `low >= high`.
    pub fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        assert!(low < high, "range_f64: low must be less than high");
        f64::from(self.next_u32()) / f64::from(0x7FFF_FFFFu32) * (high - low) + low
    }

    /// Return `true` with probability `1/odds` (a `1-in-N` event roll).
    ///
    /// Matches the generator's convention of comparing a ranged draw
    /// against 1, so the roll consumes exactly one draw.
    pub fn one_in(&mut self, odds: u32) -> bool {
        self.range_u32(0, odds) == 1
    }
}
