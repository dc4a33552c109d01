//! Syllable parser.
//!
//! Splits a composed Vietnamese word into initial consonant, vowel nucleus,
//! final consonant, tone and per-position vowel modifiers. Parsing is
//! permissive: unknown letters are carried through and judged later by the
//! spell checker.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::char_state::{self, Modifier, ToneMark};
use crate::spelling;
use crate::utils;

/// The structural parts of one syllable.
///
/// `initial_consonant + vowel_nucleus + final_consonant` always equals the
/// lowercase base-letter form of the parsed word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SyllableParts {
    pub initial_consonant: String,
    /// Base vowels only; modifiers live in `vowel_modifiers`.
    pub vowel_nucleus: String,
    pub final_consonant: String,
    pub tone: Option<ToneMark>,
    /// Nucleus-relative position → modifier.
    pub vowel_modifiers: BTreeMap<usize, Modifier>,
}

impl SyllableParts {
    /// The base letters of the whole syllable.
    pub fn base_letters(&self) -> String {
        let mut out = String::with_capacity(
            self.initial_consonant.len() + self.vowel_nucleus.len() + self.final_consonant.len(),
        );
        out.push_str(&self.initial_consonant);
        out.push_str(&self.vowel_nucleus);
        out.push_str(&self.final_consonant);
        out
    }
}

/// Stateless parser over the static spelling tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyllableParser;

impl SyllableParser {
    /// Parse a word. Returns `None` only for the empty string.
    pub fn parse(word: &str) -> Option<SyllableParts> {
        if word.is_empty() {
            return None;
        }

        let normalized = utils::normalize(word);
        let mut bases: Vec<char> = Vec::with_capacity(normalized.len());
        let mut modifiers: BTreeMap<usize, Modifier> = BTreeMap::new();
        let mut tone = None;

        for ch in normalized.chars().flat_map(char::to_lowercase) {
            match char_state::decompose(ch) {
                Some((base, modifier, char_tone)) => {
                    if let Some(modifier) = modifier.filter(|m| *m != Modifier::Stroke) {
                        modifiers.insert(bases.len(), modifier);
                    }
                    if char_tone.is_some() {
                        tone = char_tone;
                    }
                    bases.push(base);
                }
                None => bases.push(ch),
            }
        }

        let initial_len = initial_consonant_len(&bases);
        let (initial, rest) = bases.split_at(initial_len);
        let final_len = final_consonant_len(rest);
        let (nucleus, final_consonant) = rest.split_at(rest.len() - final_len);

        let vowel_modifiers = modifiers
            .into_iter()
            .filter_map(|(index, modifier)| {
                let relative = index.checked_sub(initial_len)?;
                (relative < nucleus.len()).then_some((relative, modifier))
            })
            .collect();

        Some(SyllableParts {
            initial_consonant: initial.iter().collect(),
            vowel_nucleus: nucleus.iter().collect(),
            final_consonant: final_consonant.iter().collect(),
            tone,
            vowel_modifiers,
        })
    }
}

fn is_vowel(ch: &char) -> bool {
    char_state::is_vowel(*ch)
}

/// Length of the initial consonant at the start of `bases`.
fn initial_consonant_len(bases: &[char]) -> usize {
    if bases.starts_with(&['n', 'g', 'h']) {
        return 3;
    }
    if bases.len() >= 2 {
        let digraph: String = bases[..2].iter().collect();
        if spelling::is_valid_initial(&digraph) {
            // "gi" with no vowel after it is "g" + nucleus "i" (gì, gìn).
            if digraph == "gi" && !bases.get(2).is_some_and(is_vowel) {
                return 1;
            }
            return 2;
        }
    }
    match bases.first() {
        Some(first) if !is_vowel(first) => 1,
        _ => 0,
    }
}

/// Length of the final consonant at the end of `tail`.
///
/// A final is only recognised when everything before it is a vowel.
fn final_consonant_len(tail: &[char]) -> usize {
    if tail.len() < 2 {
        return 0;
    }
    let n = tail.len();
    let last_two: String = tail[n - 2..].iter().collect();
    if spelling::is_valid_final(&last_two) && tail[..n - 2].iter().all(is_vowel) {
        return 2;
    }
    let last = tail[n - 1];
    if !is_vowel(&last)
        && spelling::is_valid_final(last.encode_utf8(&mut [0; 4]))
        && tail[..n - 1].iter().all(is_vowel)
    {
        return 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> (String, String, String) {
        let p = SyllableParser::parse(word).unwrap();
        (p.initial_consonant, p.vowel_nucleus, p.final_consonant)
    }

    fn triple(i: &str, v: &str, f: &str) -> (String, String, String) {
        (i.to_string(), v.to_string(), f.to_string())
    }

    #[test]
    fn simple_syllables() {
        assert_eq!(parts("ba"), triple("b", "a", ""));
        assert_eq!(parts("ban"), triple("b", "a", "n"));
        assert_eq!(parts("bang"), triple("b", "a", "ng"));
        assert_eq!(parts("an"), triple("", "a", "n"));
        assert_eq!(parts("nghe"), triple("ngh", "e", ""));
    }

    #[test]
    fn gi_without_vowel_keeps_i_in_nucleus() {
        assert_eq!(parts("gì"), triple("g", "i", ""));
        assert_eq!(parts("gìn"), triple("g", "i", "n"));
        assert_eq!(parts("gia"), triple("gi", "a", ""));
    }

    #[test]
    fn one_letter_tail_has_no_final() {
        assert_eq!(parts("th"), triple("th", "", ""));
        assert_eq!(parts("bc"), triple("b", "c", ""));
    }

    #[test]
    fn empty_input() {
        assert!(SyllableParser::parse("").is_none());
    }

    #[test]
    fn decomposed_input_is_normalized() {
        let decomposed = "tie\u{0302}\u{0301}n";
        let p = SyllableParser::parse(decomposed).unwrap();
        assert_eq!(p.vowel_nucleus, "ie");
        assert_eq!(p.tone, Some(ToneMark::Acute));
        assert_eq!(p.vowel_modifiers.get(&1), Some(&Modifier::Circumflex));
    }
}
