//! Static Vietnamese spelling tables.
//!
//! All tables are compile-time `phf` sets and maps; nothing is built at
//! runtime. Nucleus keys are written with base letters only, modifiers are
//! listed separately per position.

use phf::{phf_map, phf_set};

use crate::char_state::{self, Modifier, ToneMark};

/// Initial consonants, including the `gi`/`qu` clusters and `ngh`.
pub static INITIAL_CONSONANTS: phf::Set<&'static str> = phf_set! {
    "b", "c", "ch", "d", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n",
    "ng", "ngh", "nh", "p", "ph", "qu", "r", "s", "t", "th", "tr", "v", "x",
};

/// Final consonants.
pub static FINAL_CONSONANTS: phf::Set<&'static str> = phf_set! {
    "c", "ch", "m", "n", "ng", "nh", "p", "t",
};

/// Stop consonants that only combine with acute, dot or no tone.
pub static SHARP_ENDINGS: phf::Set<&'static str> = phf_set! {
    "c", "ch", "p", "t",
};

/// Legality data for one vowel nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelCombination {
    /// Whether a final consonant may follow.
    pub allows_end_consonant: bool,
    /// Modifiers the nucleus carries in its written form, by position.
    pub required_modifiers: &'static [(usize, Modifier)],
}

const fn open(required_modifiers: &'static [(usize, Modifier)]) -> VowelCombination {
    VowelCombination {
        allows_end_consonant: false,
        required_modifiers,
    }
}

const fn closable(required_modifiers: &'static [(usize, Modifier)]) -> VowelCombination {
    VowelCombination {
        allows_end_consonant: true,
        required_modifiers,
    }
}

/// Every legal vowel nucleus keyed by its base letters.
pub static VOWEL_COMBINATIONS: phf::Map<&'static str, VowelCombination> = phf_map! {
    "a" => closable(&[]),
    "e" => closable(&[]),
    "i" => closable(&[]),
    "o" => closable(&[]),
    "u" => closable(&[]),
    "y" => closable(&[]),

    "ai" => open(&[]),
    "ao" => open(&[]),
    "au" => open(&[]),
    "ay" => open(&[]),
    "eo" => open(&[]),
    "eu" => open(&[(0, Modifier::Circumflex)]),
    "ia" => open(&[]),
    "ie" => closable(&[(1, Modifier::Circumflex)]),
    "iu" => open(&[]),
    "ieu" => open(&[(1, Modifier::Circumflex)]),

    "oa" => closable(&[]),
    "oe" => closable(&[]),
    "oo" => closable(&[]),
    "oi" => open(&[]),
    "oai" => open(&[]),
    "oao" => open(&[]),
    "oay" => open(&[]),
    "oeo" => open(&[]),

    "ua" => closable(&[]),
    "ue" => closable(&[(1, Modifier::Circumflex)]),
    "ui" => open(&[]),
    "uo" => closable(&[(1, Modifier::Circumflex)]),
    "uy" => closable(&[]),
    "uao" => open(&[]),
    "uay" => open(&[]),
    "uoi" => open(&[(1, Modifier::Circumflex)]),
    "uou" => open(&[(0, Modifier::Horn), (1, Modifier::Horn)]),
    "uyu" => open(&[]),
    "uya" => open(&[]),
    "uye" => closable(&[(2, Modifier::Circumflex)]),
    "uu" => open(&[(0, Modifier::Horn)]),

    "ye" => closable(&[(1, Modifier::Circumflex)]),
    "yeu" => open(&[(1, Modifier::Circumflex)]),
};

pub fn is_valid_initial(consonant: &str) -> bool {
    INITIAL_CONSONANTS.contains(consonant)
}

pub fn is_valid_final(consonant: &str) -> bool {
    FINAL_CONSONANTS.contains(consonant)
}

pub fn is_sharp_ending(consonant: &str) -> bool {
    SHARP_ENDINGS.contains(consonant)
}

/// Look up a nucleus by its base letters.
pub fn vowel_combination(nucleus: &str) -> Option<&'static VowelCombination> {
    VOWEL_COMBINATIONS.get(nucleus)
}

/// Sharp endings only accept no tone, acute or dot below.
pub fn is_valid_tone_with_ending(tone: Option<ToneMark>, final_consonant: &str) -> bool {
    if !is_sharp_ending(final_consonant) {
        return true;
    }
    matches!(tone, None | Some(ToneMark::Acute) | Some(ToneMark::Dot))
}

/// Render a nucleus with the modifiers it requires, e.g. `"ie"` → `"iê"`.
///
/// Unknown nuclei are returned unchanged.
pub fn canonical_nucleus(nucleus: &str) -> String {
    let Some(combination) = vowel_combination(nucleus) else {
        return nucleus.to_string();
    };
    nucleus
        .chars()
        .enumerate()
        .map(|(i, base)| {
            let modifier = combination
                .required_modifiers
                .iter()
                .find(|(pos, _)| *pos == i)
                .map(|(_, m)| *m);
            char_state::compose(base, modifier, None)
        })
        .collect()
}
