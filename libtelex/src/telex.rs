//! Telex input method.
//!
//! Tone keys: `s` acute, `f` grave, `r` hook, `x` tilde, `j` dot, `z`
//! removes the tone. Modifiers: `aa`/`ee`/`oo` circumflex, `dd` stroke,
//! `w` breve on `a` and horn on `o`/`u`. A `w` with nothing to decorate
//! produces `ư`, and the bracket keys produce `ơ`/`ư`.

use libvietnamese_core::{Modifier, ToneMark, Transformation, TypedCharacter, TypingBuffer};
use tracing::trace;

use crate::input_method::{InputMethod, InputMethodState, KeyContext};
use crate::quick_telex;

/// Letters after which a bracket key stays a literal bracket.
const BRACKET_BLOCKERS: [char; 2] = ['w', 'e'];

const SPECIAL_KEYS: [char; 14] = [
    's', 'f', 'r', 'x', 'j', 'z', 'a', 'e', 'o', 'd', 'w', '[', ']', '{',
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Telex;

impl Telex {
    /// Map a key to a transformation without consulting the undo state.
    pub fn dispatch(&self, key: char, buffer: &TypingBuffer) -> Option<Transformation> {
        let lower = key.to_ascii_lowercase();
        match lower {
            's' | 'f' | 'r' | 'x' | 'j' => {
                let tone = match lower {
                    's' => ToneMark::Acute,
                    'f' => ToneMark::Grave,
                    'r' => ToneMark::Hook,
                    'x' => ToneMark::Tilde,
                    _ => ToneMark::Dot,
                };
                buffer.find_mark_position()?;
                Some(Transformation::Tone(tone))
            }
            'z' => buffer.tone().map(|_| Transformation::RemoveTone),
            'a' | 'e' | 'o' => double_vowel(lower, buffer.last()?),
            'd' => {
                let last = buffer.last()?;
                (last.base == 'd' && !last.state.has_modifier())
                    .then_some(Transformation::Modifier(Modifier::Stroke))
            }
            'w' => match w_anchor(buffer) {
                Some(slot) => w_modifier(slot),
                None => Some(Transformation::Standalone(if key.is_uppercase() {
                    'Ư'
                } else {
                    'ư'
                })),
            },
            '[' | ']' | '{' | '}' => bracket(key, buffer),
            _ => None,
        }
    }
}

/// `aa`, `ee`, `oo` → circumflex; also turns `ă` into `â` and `ơ` into `ô`.
fn double_vowel(key: char, last: &TypedCharacter) -> Option<Transformation> {
    if last.base != key {
        return None;
    }
    match last.modifier() {
        None | Some(Modifier::Breve) | Some(Modifier::Horn) => {
            Some(Transformation::Modifier(Modifier::Circumflex))
        }
        _ => None,
    }
}

/// The slot a `w` would decorate: a trailing `a`, `o` or `u`.
pub(crate) fn w_anchor(buffer: &TypingBuffer) -> Option<&TypedCharacter> {
    buffer
        .last()
        .filter(|slot| matches!(slot.base, 'a' | 'o' | 'u'))
}

/// Breve on `a`, horn on `o`/`u`, unless the slot already carries it.
pub(crate) fn w_modifier(slot: &TypedCharacter) -> Option<Transformation> {
    let modifier = if slot.base == 'a' {
        Modifier::Breve
    } else {
        Modifier::Horn
    };
    (slot.modifier() != Some(modifier)).then_some(Transformation::Modifier(modifier))
}

fn bracket(key: char, buffer: &TypingBuffer) -> Option<Transformation> {
    let standalone = match key {
        '[' => 'ơ',
        ']' => 'ư',
        '{' => 'Ơ',
        _ => 'Ư',
    };
    let chars = buffer.chars();
    let Some(last) = chars.last() else {
        return Some(Transformation::Standalone(standalone));
    };

    // A bare "u" right after a consonant still takes the bracket vowel.
    let u_after_consonant = last.base == 'u'
        && last.state.is_empty()
        && chars.len() >= 2
        && !chars[chars.len() - 2].is_vowel();
    if !u_after_consonant && (last.is_vowel() || BRACKET_BLOCKERS.contains(&last.base)) {
        return None;
    }
    Some(Transformation::Standalone(standalone))
}

impl InputMethod for Telex {
    fn name(&self) -> &'static str {
        "Telex"
    }

    fn id(&self) -> &'static str {
        "telex"
    }

    fn process_character(
        &self,
        key: char,
        context: &KeyContext<'_>,
        state: &mut InputMethodState,
    ) -> Option<Transformation> {
        state.observe_key(key);
        if state.is_disabled(key) {
            trace!(%key, "key disabled after undo");
            return None;
        }
        if let Some(undo) = state.take_undo(key) {
            return Some(undo);
        }
        if context.quick_telex {
            if let Some(combo) = quick_telex::combo(key, context.buffer) {
                return Some(combo);
            }
        }
        self.dispatch(key, context.buffer)
    }

    fn is_special_key(&self, key: char) -> bool {
        SPECIAL_KEYS.contains(&key.to_ascii_lowercase()) || key == '}'
    }
}
