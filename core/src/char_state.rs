//! Per-character diacritic state and the Unicode rendering tables.
//!
//! A Vietnamese letter is modeled as a base Latin letter plus at most one
//! modifier (circumflex, breve, horn, stroke) and at most one tone mark.
//! The displayed character is a pure function of those three values, looked
//! up in `VOWEL_TABLE` (12 vowel letters x 6 tone columns) plus `đ`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// The five Vietnamese tone marks. "No tone" (ngang) is `None` at use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMark {
    /// sắc (á)
    Acute,
    /// huyền (à)
    Grave,
    /// hỏi (ả)
    Hook,
    /// ngã (ã)
    Tilde,
    /// nặng (ạ)
    Dot,
}

impl ToneMark {
    /// Column of this tone in `VOWEL_TABLE` (column 0 is the bare vowel).
    fn column(self) -> usize {
        match self {
            ToneMark::Acute => 1,
            ToneMark::Grave => 2,
            ToneMark::Hook => 3,
            ToneMark::Tilde => 4,
            ToneMark::Dot => 5,
        }
    }

    fn from_column(column: usize) -> Option<Self> {
        match column {
            1 => Some(ToneMark::Acute),
            2 => Some(ToneMark::Grave),
            3 => Some(ToneMark::Hook),
            4 => Some(ToneMark::Tilde),
            5 => Some(ToneMark::Dot),
            _ => None,
        }
    }
}

/// Non-tone diacritics that change the quality of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// mũ (â, ê, ô)
    Circumflex,
    /// trăng (ă)
    Breve,
    /// móc (ơ, ư)
    Horn,
    /// gạch (đ)
    Stroke,
}

impl Modifier {
    /// Whether this modifier can decorate the given lowercase base letter.
    pub fn applies_to(self, base: char) -> bool {
        match self {
            Modifier::Circumflex => matches!(base, 'a' | 'e' | 'o'),
            Modifier::Breve => base == 'a',
            Modifier::Horn => matches!(base, 'o' | 'u'),
            Modifier::Stroke => base == 'd',
        }
    }
}

bitflags! {
    /// Independent diacritic flags over one character slot.
    ///
    /// Tone flags are mutually exclusive, and so are modifier flags; the
    /// setters below enforce that. `HORN_OR_BREVE` is the Telex "w" mark:
    /// a breve on `a`, a horn on `o`/`u`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharacterState: u16 {
        const ACUTE = 1 << 0;
        const GRAVE = 1 << 1;
        const HOOK = 1 << 2;
        const TILDE = 1 << 3;
        const DOT_BELOW = 1 << 4;
        const CIRCUMFLEX = 1 << 5;
        const BREVE = 1 << 6;
        const HORN_OR_BREVE = 1 << 7;
        const STROKE = 1 << 8;

        const TONES = Self::ACUTE.bits()
            | Self::GRAVE.bits()
            | Self::HOOK.bits()
            | Self::TILDE.bits()
            | Self::DOT_BELOW.bits();
        const MODIFIERS = Self::CIRCUMFLEX.bits()
            | Self::BREVE.bits()
            | Self::HORN_OR_BREVE.bits()
            | Self::STROKE.bits();
    }
}

impl CharacterState {
    /// The active tone, if any.
    pub fn tone(self) -> Option<ToneMark> {
        if self.contains(Self::ACUTE) {
            Some(ToneMark::Acute)
        } else if self.contains(Self::GRAVE) {
            Some(ToneMark::Grave)
        } else if self.contains(Self::HOOK) {
            Some(ToneMark::Hook)
        } else if self.contains(Self::TILDE) {
            Some(ToneMark::Tilde)
        } else if self.contains(Self::DOT_BELOW) {
            Some(ToneMark::Dot)
        } else {
            None
        }
    }

    pub fn has_tone(self) -> bool {
        self.intersects(Self::TONES)
    }

    /// Replace the tone (or clear it with `None`).
    pub fn set_tone(&mut self, tone: Option<ToneMark>) {
        self.remove(Self::TONES);
        if let Some(tone) = tone {
            self.insert(Self::from(tone));
        }
    }

    /// The active modifier as seen on `base`.
    pub fn modifier(self, base: char) -> Option<Modifier> {
        if self.contains(Self::CIRCUMFLEX) {
            Some(Modifier::Circumflex)
        } else if self.contains(Self::BREVE) {
            Some(Modifier::Breve)
        } else if self.contains(Self::HORN_OR_BREVE) {
            if base == 'a' {
                Some(Modifier::Breve)
            } else {
                Some(Modifier::Horn)
            }
        } else if self.contains(Self::STROKE) {
            Some(Modifier::Stroke)
        } else {
            None
        }
    }

    pub fn has_modifier(self) -> bool {
        self.intersects(Self::MODIFIERS)
    }

    /// Replace the modifier (or clear it with `None`).
    pub fn set_modifier(&mut self, modifier: Option<Modifier>) {
        self.remove(Self::MODIFIERS);
        if let Some(modifier) = modifier {
            self.insert(Self::from(modifier));
        }
    }
}

impl From<ToneMark> for CharacterState {
    fn from(tone: ToneMark) -> Self {
        match tone {
            ToneMark::Acute => Self::ACUTE,
            ToneMark::Grave => Self::GRAVE,
            ToneMark::Hook => Self::HOOK,
            ToneMark::Tilde => Self::TILDE,
            ToneMark::Dot => Self::DOT_BELOW,
        }
    }
}

impl From<Modifier> for CharacterState {
    fn from(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Circumflex => Self::CIRCUMFLEX,
            Modifier::Breve => Self::BREVE,
            Modifier::Horn => Self::HORN_OR_BREVE,
            Modifier::Stroke => Self::STROKE,
        }
    }
}

/// Base vowels in Vietnamese (lowercase).
pub fn is_vowel(base: char) -> bool {
    matches!(base, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// (base, modifier, [bare, acute, grave, hook, tilde, dot])
const VOWEL_TABLE: [(char, Option<Modifier>, [char; 6]); 12] = [
    ('a', None, ['a', 'á', 'à', 'ả', 'ã', 'ạ']),
    ('a', Some(Modifier::Breve), ['ă', 'ắ', 'ằ', 'ẳ', 'ẵ', 'ặ']),
    ('a', Some(Modifier::Circumflex), ['â', 'ấ', 'ầ', 'ẩ', 'ẫ', 'ậ']),
    ('e', None, ['e', 'é', 'è', 'ẻ', 'ẽ', 'ẹ']),
    ('e', Some(Modifier::Circumflex), ['ê', 'ế', 'ề', 'ể', 'ễ', 'ệ']),
    ('i', None, ['i', 'í', 'ì', 'ỉ', 'ĩ', 'ị']),
    ('o', None, ['o', 'ó', 'ò', 'ỏ', 'õ', 'ọ']),
    ('o', Some(Modifier::Circumflex), ['ô', 'ố', 'ồ', 'ổ', 'ỗ', 'ộ']),
    ('o', Some(Modifier::Horn), ['ơ', 'ớ', 'ờ', 'ở', 'ỡ', 'ợ']),
    ('u', None, ['u', 'ú', 'ù', 'ủ', 'ũ', 'ụ']),
    ('u', Some(Modifier::Horn), ['ư', 'ứ', 'ừ', 'ử', 'ữ', 'ự']),
    ('y', None, ['y', 'ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ']),
];

/// Render a lowercase letter from its base, modifier and tone.
///
/// Modifiers that do not apply to `base` are ignored, and tones are ignored
/// on consonants.
pub fn compose(base: char, modifier: Option<Modifier>, tone: Option<ToneMark>) -> char {
    if base == 'd' {
        return if modifier == Some(Modifier::Stroke) { 'đ' } else { 'd' };
    }
    let modifier = modifier.filter(|m| m.applies_to(base));
    let column = tone.map_or(0, ToneMark::column);
    VOWEL_TABLE
        .iter()
        .find(|(b, m, _)| *b == base && *m == modifier)
        .map(|(_, _, row)| row[column])
        .unwrap_or(base)
}

/// Split a lowercase precomposed Vietnamese letter into (base, modifier, tone).
///
/// Returns `None` for characters outside the vowel table and `đ`; plain
/// consonants are handled by the caller.
pub fn decompose(ch: char) -> Option<(char, Option<Modifier>, Option<ToneMark>)> {
    if ch == 'đ' {
        return Some(('d', Some(Modifier::Stroke), None));
    }
    VOWEL_TABLE.iter().find_map(|(base, modifier, row)| {
        row.iter()
            .position(|&c| c == ch)
            .map(|column| (*base, *modifier, ToneMark::from_column(column)))
    })
}

/// Upper-case a rendered letter. Every Vietnamese letter has a single-char
/// uppercase form.
pub fn to_upper(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}
