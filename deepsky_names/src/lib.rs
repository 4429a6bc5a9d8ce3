// deepsky_names — procedural name generation.
//
// Builds pronounceable uppercase identifiers for stars and planets by
// alternating consonant and vowel runs. The generator is a pure function
// of an integer seed — no process-wide RNG, no hidden state — so the same
// seed always yields the same name, independent of call order or threads.
//
// Module overview:
// - `alphabet.rs`: the consonant/vowel letter tables and the run limit.
// - `names.rs`:    the `generate_name(seed)` algorithm.
//
// **Critical constraint: determinism.** All randomness comes from a
// `SectorRng` (see `deepsky_prng`) seeded from the caller-supplied value.

pub mod alphabet;
pub mod names;

pub use names::generate_name;
