// Query façade: the entry point for the rendering layer.
//
// `Universe` owns the generation config and exposes exactly two
// operations: a coarse per-sector probe for whole-screen scans, and a
// detailed inspect for a single selected system. Both recompute from
// scratch on every call — there is no caching layer; recomputation is the
// accepted cost of zero storage.

use crate::config::UniverseConfig;
use crate::generator::{Detail, generate_system};
use crate::system::StarSystem;

/// The procedural universe. Holds only the generation config; all content
/// is recomputed on demand from coordinates.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    config: UniverseConfig,
}

impl Universe {
    pub fn new(config: UniverseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Coarse existence/overview probe for the sector at `(x, y)`.
    ///
    /// Cheap enough to run once per visible sector per frame: a single
    /// draw for empty sectors, star attributes only for occupied ones,
    /// never any planets. Idempotent and side-effect-free.
    pub fn probe(&self, x: u32, y: u32) -> StarSystem {
        generate_system(x, y, Detail::Overview, &self.config)
    }

    /// Fully detailed generation for the sector at `(x, y)`, planets and
    /// moons included. Run once per user selection. Agrees with `probe`
    /// on every star attribute; only the planet sequence differs.
    pub fn inspect(&self, x: u32, y: u32) -> StarSystem {
        generate_system(x, y, Detail::Full, &self.config)
    }
}
