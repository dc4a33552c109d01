//! Doubled-consonant shortcuts for initial consonant clusters.
//!
//! `cc`→`ch`, `gg`→`gi`, `kk`→`kh`, `ngg`→`ngh`, `nn`→`ng`, `pp`→`ph`,
//! `qq`→`qu`, `tt`→`th`. They only fire while no vowel has been typed, so
//! final consonants are never rewritten.

use libvietnamese_core::{Transformation, TypingBuffer};
use phf::phf_map;

static COMBOS: phf::Map<char, char> = phf_map! {
    'c' => 'h',
    'g' => 'i',
    'k' => 'h',
    'n' => 'g',
    'p' => 'h',
    'q' => 'u',
    't' => 'h',
};

/// The combo transformation for `key`, if the buffer ends in the same
/// consonant.
pub fn combo(key: char, buffer: &TypingBuffer) -> Option<Transformation> {
    let key = key.to_ascii_lowercase();
    let chars = buffer.chars();
    let last = chars.last()?;
    if last.base != key || !last.state.is_empty() || chars.iter().any(|c| c.is_vowel()) {
        return None;
    }
    if key == 'g' && chars.len() >= 2 && chars[chars.len() - 2].base == 'n' {
        return Some(Transformation::QuickCombo('h'));
    }
    COMBOS.get(&key).map(|&second| Transformation::QuickCombo(second))
}
