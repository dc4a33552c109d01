//! libvietnamese-core
//!
//! Character model, typing buffer, spelling rules, syllable parser and
//! configuration shared by Vietnamese input-method crates (libtelex).
//!
//! Everything here is synchronous and allocation-light: the buffer holds a
//! single word and the linguistic tables are compile-time constants.
//!
//! Public API:
//! - `CharacterState` - Per-slot tone and modifier flags
//! - `TypingBuffer` - The word being composed, with mark placement
//! - `Transformation` - What an input method asks the buffer to do
//! - `SyllableParser` - Initial / nucleus / final decomposition
//! - `SpellChecker` - Syllable-structure validation
//! - `Config` - Configuration and feature flags
use serde::{Deserialize, Serialize};

pub mod char_state;
pub use char_state::{CharacterState, Modifier, ToneMark};

pub mod typing_buffer;
pub use typing_buffer::{BufferSnapshot, MarkStyle, TypedCharacter, TypingBuffer};

pub mod transformation;
pub use transformation::{Transformation, TransformationKind};

pub mod spelling;
pub use spelling::VowelCombination;

pub mod syllable;
pub use syllable::{SyllableParser, SyllableParts};

pub mod spell_checker;
pub use spell_checker::{DefaultSpellChecker, SpellCheckResult, SpellChecker};

/// Generic configuration for the composition core.
///
/// This config contains only scheme-agnostic fields. Keystroke-scheme
/// options (active input method, quick telex) belong in `TelexConfig` in the
/// libtelex crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Validate composed words against Vietnamese syllable structure.
    pub spell_check_enabled: bool,

    /// Roll back to the literal keystrokes when a word fails validation.
    pub restore_if_wrong_spelling: bool,

    /// Put the tone on the second vowel of open `oa`, `oe`, `uy` (hoà, thuý).
    pub modern_orthography: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spell_check_enabled: true,
            restore_if_wrong_spelling: true,
            modern_orthography: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Mark placement style implied by `modern_orthography`.
    pub fn mark_style(&self) -> MarkStyle {
        if self.modern_orthography {
            MarkStyle::Modern
        } else {
            MarkStyle::Traditional
        }
    }
}

/// Small helpers shared by the parser and front ends.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Strip tones and modifiers, keeping case (`"Đường"` → `"Duong"`).
    pub fn strip_diacritics(s: &str) -> String {
        normalize(s)
            .chars()
            .map(|ch| {
                let lower = ch.to_lowercase().next().unwrap_or(ch);
                let base = crate::char_state::decompose(lower).map_or(lower, |(base, _, _)| base);
                if ch.is_uppercase() {
                    base.to_ascii_uppercase()
                } else {
                    base
                }
            })
            .collect()
    }
}
