// Name generation: consonant/vowel alternation over a seeded stream.
//
// The generator takes a bare integer seed rather than `&mut SectorRng` so
// callers can derive sibling names from adjacent seeds (star at `x + y`,
// planet i at `x + y + i + 1`) without threading a shared stream through
// the system generator.

use crate::alphabet::{CONSONANTS, MAX_RUN, VOWELS};
use deepsky_prng::SectorRng;

/// Generate a name from a seed. Pure function: same seed, same name.
///
/// Algorithm:
/// 1. Draw a length uniformly in [2, 11].
/// 2. For each character, draw a class coin (consonant vs vowel). The coin
///    is overridden when the previous `MAX_RUN` characters share a class —
///    the run is broken regardless of the draw.
/// 3. Draw the letter uniformly from the chosen class table.
///
/// Output is a non-empty string of uppercase letters with no run of three
/// same-class characters. Nothing stronger than the run limit is promised
/// about pronounceability.
pub fn generate_name(seed: u32) -> String {
    let mut rng = SectorRng::new(seed);
    let length = rng.range_u32(2, 12);

    let mut name = String::with_capacity(length as usize);
    let mut pick_consonant = rng.range_u32(0, 2) == 0;
    let mut consonant_run = 0;
    let mut vowel_run = 0;

    for _ in 0..length {
        if (pick_consonant && consonant_run < MAX_RUN) || vowel_run == MAX_RUN {
            let idx = rng.range_u32(0, CONSONANTS.len() as u32);
            name.push(CONSONANTS[idx as usize]);
            consonant_run += 1;
            vowel_run = 0;
        } else {
            let idx = rng.range_u32(0, VOWELS.len() as u32);
            name.push(VOWELS[idx as usize]);
            vowel_run += 1;
            consonant_run = 0;
        }
        pick_consonant = rng.range_u32(0, 2) == 0;
    }

    name
}
