// Letter tables for name generation.
//
// Two fixed, ordered tables — 20 consonants and 6 vowels — plus the run
// limit that keeps output pronounceable. Table order is part of the
// generated-output contract: `names.rs` indexes these tables with ranged
// draws, so reordering or resizing them changes every generated name.

/// Consonant table (20 entries, fixed order).
pub const CONSONANTS: [char; 20] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'Z',
    'X', 'W',
];

/// Vowel table (6 entries, fixed order).
pub const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Maximum run of same-class letters. A third consecutive consonant or
/// vowel is never emitted; the class is forced to flip instead.
pub const MAX_RUN: u32 = 2;
