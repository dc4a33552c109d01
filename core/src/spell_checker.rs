//! Syllable-structure spell checking.
//!
//! Only the shape of a syllable is checked (initial, nucleus, final, tone
//! compatibility). There is no dictionary.

use std::fmt;

use crate::spelling;
use crate::syllable::{SyllableParser, SyllableParts};

/// Three-valued check result.
///
/// `Unknown` means the word looks incomplete (a bare consonant cluster) and
/// must never trigger a restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellCheckResult {
    Valid,
    Invalid { reason: String },
    Unknown,
}

impl SpellCheckResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, SpellCheckResult::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SpellCheckResult::Invalid { .. })
    }

    fn invalid(reason: impl Into<String>) -> Self {
        SpellCheckResult::Invalid {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SpellCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellCheckResult::Valid => write!(f, "valid"),
            SpellCheckResult::Invalid { reason } => write!(f, "invalid: {}", reason),
            SpellCheckResult::Unknown => write!(f, "unknown"),
        }
    }
}

/// A pluggable syllable validator.
pub trait SpellChecker {
    /// Validate a composed word.
    fn check(&self, word: &str) -> SpellCheckResult;

    fn is_valid_initial_consonant(&self, consonant: &str) -> bool {
        consonant.is_empty() || spelling::is_valid_initial(consonant)
    }

    fn is_valid_vowel_combination(&self, nucleus: &str) -> bool {
        spelling::vowel_combination(nucleus).is_some()
    }

    fn is_valid_final_consonant(&self, consonant: &str) -> bool {
        spelling::is_valid_final(consonant)
    }
}

/// Checker backed by the static Vietnamese spelling tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSpellChecker;

impl DefaultSpellChecker {
    pub fn new() -> Self {
        Self
    }

    /// Validate already parsed parts.
    pub fn check_parts(&self, parts: &SyllableParts) -> SpellCheckResult {
        if parts.vowel_nucleus.is_empty() {
            if parts.initial_consonant.is_empty() {
                return SpellCheckResult::invalid("No vowel or consonant");
            }
            return SpellCheckResult::Unknown;
        }

        if !self.is_valid_initial_consonant(&parts.initial_consonant) {
            return SpellCheckResult::invalid(format!(
                "Invalid initial consonant: {}",
                parts.initial_consonant
            ));
        }

        if !self.is_valid_vowel_combination(&parts.vowel_nucleus) {
            return SpellCheckResult::invalid(format!(
                "Invalid vowel combination: {}",
                parts.vowel_nucleus
            ));
        }
        let allows_end_consonant = spelling::vowel_combination(&parts.vowel_nucleus)
            .map_or(true, |c| c.allows_end_consonant);

        if !parts.final_consonant.is_empty() {
            if !self.is_valid_final_consonant(&parts.final_consonant) {
                return SpellCheckResult::invalid(format!(
                    "Invalid final consonant: {}",
                    parts.final_consonant
                ));
            }
            if !allows_end_consonant {
                return SpellCheckResult::invalid(format!(
                    "Vowel '{}' cannot have ending consonant",
                    parts.vowel_nucleus
                ));
            }
        }

        if !spelling::is_valid_tone_with_ending(parts.tone, &parts.final_consonant) {
            return SpellCheckResult::invalid("Invalid tone with sharp ending");
        }

        SpellCheckResult::Valid
    }
}

impl SpellChecker for DefaultSpellChecker {
    fn check(&self, word: &str) -> SpellCheckResult {
        match SyllableParser::parse(word) {
            Some(parts) => self.check_parts(&parts),
            None => SpellCheckResult::invalid("Empty word"),
        }
    }
}
