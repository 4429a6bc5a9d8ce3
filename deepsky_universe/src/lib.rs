// deepsky_universe — deterministic procedural universe library.
//
// This crate derives star systems, planets, and moons from integer world
// coordinates, recomputed on demand and never stored. It has zero
// rendering dependencies and can be tested, benchmarked, and run headless.
//
// Module overview:
// - `universe.rs`:  The `Universe` façade — `probe` (coarse) and `inspect` (full).
// - `generator.rs`: The per-query derivation pass and star classification.
// - `system.rs`:    `Planet` / `StarSystem` value records.
// - `palette.rs`:   Fixed star and planet color tables, band slices.
// - `config.rs`:    `UniverseConfig` — all tunable generation parameters.
// - `types.rs`:     `Rgb`, hue families, orbital bands, atmospheres, star classes.
//
// The rendering layer consumes the returned records (positions, colors,
// counts, labels) to draw them; that boundary is enforced at the compiler
// level — this crate cannot depend on a frame loop, a window, or input
// handling.
//
// **Critical constraint: determinism.** Generation is a pure function:
// `(x, y, detail, config) -> StarSystem`. All randomness comes from a
// coordinate-seeded `SectorRng` (re-exported from `deepsky_prng`) owned by
// the single query in flight. No caches, no system time, no OS entropy.

pub mod config;
pub mod generator;
pub mod palette;
pub use deepsky_prng as prng;
pub mod system;
pub mod types;
pub mod universe;

pub use config::UniverseConfig;
pub use generator::{Detail, classify, generate_system};
pub use system::{Planet, StarSystem};
pub use types::{Atmosphere, HueFamily, OrbitBand, Rgb, StarClass};
pub use universe::Universe;
