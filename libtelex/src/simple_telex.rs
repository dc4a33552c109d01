//! Simple Telex: Telex without the shortcuts that fire on their own.
//!
//! A `w` only decorates a preceding `a`, `o` or `u`; on its own it stays a
//! literal `w`. Bracket keys are plain punctuation. Every other key is
//! handled by Telex.

use libvietnamese_core::{Modifier, Transformation, TransformationKind};
use tracing::trace;

use crate::input_method::{InputMethod, InputMethodState, KeyContext};
use crate::telex::{self, Telex};

/// Its own undo covers only `w` breve and horn; repeated tone keys and
/// double vowels go through Telex and undo there (`bass` → `bas`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTelex;

impl InputMethod for SimpleTelex {
    fn name(&self) -> &'static str {
        "Simple Telex"
    }

    fn id(&self) -> &'static str {
        "simple-telex"
    }

    fn process_character(
        &self,
        key: char,
        context: &KeyContext<'_>,
        state: &mut InputMethodState,
    ) -> Option<Transformation> {
        if matches!(key, '[' | ']' | '{' | '}') {
            return None;
        }
        if !key.eq_ignore_ascii_case(&'w') {
            return Telex.process_character(key, context, state);
        }

        state.observe_key(key);
        if state.is_disabled(key) {
            trace!(%key, "key disabled after undo");
            return None;
        }
        let undoable = state.last().is_some_and(|last| {
            last.trigger == 'w'
                && matches!(
                    last.kind,
                    TransformationKind::Modifier(Modifier::Breve | Modifier::Horn)
                )
        });
        if undoable {
            return state.take_undo(key);
        }
        telex::w_anchor(context.buffer).and_then(telex::w_modifier)
    }

    fn is_special_key(&self, key: char) -> bool {
        !matches!(key, '[' | ']' | '{' | '}') && Telex.is_special_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libvietnamese_core::TypingBuffer;

    fn buffer(word: &str) -> TypingBuffer {
        let mut buffer = TypingBuffer::new();
        for ch in word.chars() {
            buffer.push(ch);
            buffer.record_keystroke(ch);
        }
        buffer
    }

    fn process(word: &str, key: char) -> Option<Transformation> {
        let b = buffer(word);
        let mut state = InputMethodState::new();
        SimpleTelex.process_character(key, &KeyContext::new(&b), &mut state)
    }

    #[test]
    fn w_decorates_anchor() {
        assert_eq!(process("o", 'w'), Some(Transformation::Modifier(Modifier::Horn)));
        assert_eq!(process("u", 'w'), Some(Transformation::Modifier(Modifier::Horn)));
        assert_eq!(process("a", 'w'), Some(Transformation::Modifier(Modifier::Breve)));
    }

    #[test]
    fn bare_w_is_literal() {
        assert_eq!(process("", 'w'), None);
        assert_eq!(process("t", 'w'), None);
    }

    #[test]
    fn brackets_are_literal() {
        assert_eq!(process("", '['), None);
        assert_eq!(process("t", ']'), None);
        assert!(!SimpleTelex.is_special_key('['));
        assert!(SimpleTelex.is_special_key('w'));
    }

    #[test]
    fn delegates_to_telex() {
        assert_eq!(
            process("ba", 's'),
            Some(Transformation::Tone(libvietnamese_core::ToneMark::Acute))
        );
        assert_eq!(
            process("d", 'd'),
            Some(Transformation::Modifier(Modifier::Stroke))
        );
    }
}
