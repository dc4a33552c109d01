//! Per-word typing buffer with literal keystroke tracking.
//!
//! The typing buffer stores the word currently being composed as a sequence
//! of decorated slots, alongside the raw keys that produced it. The rendered
//! form (what the user sees) and the literal form (what the user typed) are
//! both derived from this buffer; the engine diffs the rendered form between
//! keystrokes and falls back to the literal form on invalid spelling.

use tracing::trace;

use crate::char_state::{self, CharacterState, Modifier, ToneMark};
use crate::transformation::Transformation;

/// Which vowel of an open two-vowel nucleus (`oa`, `oe`, `uy`) takes the tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStyle {
    /// First vowel: `hòa`, `thúy`.
    #[default]
    Traditional,
    /// Second vowel: `hoà`, `thuý`.
    Modern,
}

/// One character slot of the word being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedCharacter {
    /// Canonical lowercase base letter (or the literal key for non-letters).
    pub base: char,
    pub state: CharacterState,
    /// The keystroke that created this slot.
    pub raw: char,
    pub uppercase: bool,
}

impl TypedCharacter {
    /// A plain slot for a literal key.
    pub fn literal(raw: char) -> Self {
        Self {
            base: raw.to_lowercase().next().unwrap_or(raw),
            state: CharacterState::empty(),
            raw,
            uppercase: raw.is_uppercase(),
        }
    }

    /// A slot holding an already-composed character such as `ư` or `Ơ`.
    pub fn composed(ch: char, raw: char) -> Self {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        let mut state = CharacterState::empty();
        let base = match char_state::decompose(lower) {
            Some((base, modifier, tone)) => {
                state.set_modifier(modifier);
                state.set_tone(tone);
                base
            }
            None => lower,
        };
        Self {
            base,
            state,
            raw,
            uppercase: ch.is_uppercase(),
        }
    }

    pub fn is_vowel(&self) -> bool {
        char_state::is_vowel(self.base)
    }

    pub fn modifier(&self) -> Option<Modifier> {
        self.state.modifier(self.base)
    }

    pub fn tone(&self) -> Option<ToneMark> {
        self.state.tone()
    }

    /// The displayed character for this slot.
    pub fn render(&self) -> char {
        let ch = char_state::compose(self.base, self.modifier(), self.tone());
        if self.uppercase {
            char_state::to_upper(ch)
        } else {
            ch
        }
    }
}

/// A raw key and the buffer length right after it was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Keystroke {
    key: char,
    span: usize,
}

/// Saved slot state, taken before a transformation so it can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    chars: Vec<TypedCharacter>,
    keystrokes: usize,
}

/// The word since the last boundary plus the keystrokes that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypingBuffer {
    chars: Vec<TypedCharacter>,
    keystrokes: Vec<Keystroke>,
    mark_style: MarkStyle,
}

impl TypingBuffer {
    /// Create a new empty buffer with traditional mark placement.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mark_style(mark_style: MarkStyle) -> Self {
        Self {
            mark_style,
            ..Self::default()
        }
    }

    pub fn mark_style(&self) -> MarkStyle {
        self.mark_style
    }

    pub fn set_mark_style(&mut self, mark_style: MarkStyle) {
        self.mark_style = mark_style;
    }

    /// Number of slots (equals the number of rendered characters).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[TypedCharacter] {
        &self.chars
    }

    pub fn last(&self) -> Option<&TypedCharacter> {
        self.chars.last()
    }

    /// Clear slots and keystrokes. The mark style is kept.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.keystrokes.clear();
    }

    /// Append a plain slot for `raw`, moving the tone if the nucleus grew.
    ///
    /// The keystroke itself is recorded separately with `record_keystroke`.
    pub fn push(&mut self, raw: char) {
        self.chars.push(TypedCharacter::literal(raw));
        self.relocate_tone();
    }

    /// Append an already built slot.
    pub fn push_character(&mut self, ch: TypedCharacter) {
        self.chars.push(ch);
        self.relocate_tone();
    }

    /// Remember that `key` was handled; it spans the buffer as it is now.
    pub fn record_keystroke(&mut self, key: char) {
        self.keystrokes.push(Keystroke {
            key,
            span: self.chars.len(),
        });
    }

    /// Remember a key that decorated the slot at `index` without appending.
    ///
    /// Removing a later slot keeps this keystroke.
    pub fn record_keystroke_for(&mut self, key: char, index: usize) {
        self.keystrokes.push(Keystroke {
            key,
            span: (index + 1).min(self.chars.len()),
        });
    }

    /// Remove the last slot together with the keystrokes that reached it.
    pub fn pop(&mut self) -> Option<TypedCharacter> {
        let popped = self.chars.pop()?;
        let len = self.chars.len();
        self.keystrokes.retain(|k| k.span <= len);
        self.relocate_tone();
        Some(popped)
    }

    /// Apply a transformation produced by an input method for `key`.
    ///
    /// Returns false when the transformation has nothing to act on; the
    /// buffer is left untouched in that case.
    pub fn apply(&mut self, transformation: &Transformation, key: char) -> bool {
        let applied = match transformation {
            Transformation::Tone(tone) => self.apply_tone(*tone),
            Transformation::RemoveTone => self.remove_tone(),
            Transformation::Modifier(modifier) => self.apply_modifier(*modifier),
            Transformation::Standalone(ch) => {
                self.push_character(TypedCharacter::composed(*ch, key));
                true
            }
            Transformation::QuickCombo(ch) => {
                let mut slot = TypedCharacter::literal(*ch);
                slot.raw = key;
                slot.uppercase = key.is_uppercase();
                self.push_character(slot);
                true
            }
            Transformation::Undo(snapshot) => {
                self.undo(snapshot);
                true
            }
        };
        if !applied {
            trace!(%key, ?transformation, "nothing to transform");
        }
        applied
    }

    fn apply_tone(&mut self, tone: ToneMark) -> bool {
        let Some(pos) = self.find_mark_position() else {
            return false;
        };
        for slot in &mut self.chars {
            slot.state.set_tone(None);
        }
        self.chars[pos].state.set_tone(Some(tone));
        true
    }

    fn remove_tone(&mut self) -> bool {
        let mut removed = false;
        for slot in &mut self.chars {
            if slot.state.has_tone() {
                slot.state.set_tone(None);
                removed = true;
            }
        }
        removed
    }

    fn apply_modifier(&mut self, modifier: Modifier) -> bool {
        let len = self.chars.len();
        let Some(last) = self.chars.last_mut() else {
            return false;
        };
        if !modifier.applies_to(last.base) {
            return false;
        }
        last.state.set_modifier(Some(modifier));

        // "uo" + horn gives "ươ", except after "q".
        if modifier == Modifier::Horn && last.base == 'o' && len >= 2 {
            let prev = len - 2;
            let after_q = prev > 0 && self.chars[prev - 1].base == 'q';
            let u = &mut self.chars[prev];
            if u.base == 'u' && !u.state.has_modifier() && !after_q {
                u.state.set_modifier(Some(Modifier::Horn));
            }
        }
        self.relocate_tone();
        true
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            chars: self.chars.clone(),
            keystrokes: self.keystrokes.len(),
        }
    }

    /// Restore slots from a snapshot. Every keystroke is kept.
    ///
    /// Keys recorded since the snapshot move onto the slot the repeated key
    /// appends next, so removing that slot drops them together.
    pub fn undo(&mut self, snapshot: &BufferSnapshot) {
        self.chars = snapshot.chars.clone();
        let next_span = self.chars.len() + 1;
        for keystroke in self.keystrokes.iter_mut().skip(snapshot.keystrokes) {
            keystroke.span = next_span;
        }
    }

    /// The word as displayed.
    pub fn render(&self) -> String {
        self.chars.iter().map(TypedCharacter::render).collect()
    }

    /// The word as typed, replaying every keystroke without transformation.
    pub fn original_keystrokes(&self) -> String {
        self.keystrokes.iter().map(|k| k.key).collect()
    }

    /// Whether any slot shows something other than the key that made it.
    ///
    /// Undone transformations leave only literal slots behind.
    pub fn is_transformed(&self) -> bool {
        self.chars
            .iter()
            .any(|c| !c.state.is_empty() || TypedCharacter::literal(c.raw).base != c.base)
    }

    /// Replace every slot with the plain literal keystrokes.
    pub fn replace_with_literal(&mut self) {
        self.chars = self
            .keystrokes
            .iter()
            .map(|k| TypedCharacter::literal(k.key))
            .collect();
        for (i, keystroke) in self.keystrokes.iter_mut().enumerate() {
            keystroke.span = i + 1;
        }
    }

    /// The tone currently carried by any slot.
    pub fn tone(&self) -> Option<ToneMark> {
        self.chars.iter().find_map(TypedCharacter::tone)
    }

    /// Index of the slot carrying the tone.
    pub fn tone_position(&self) -> Option<usize> {
        self.chars.iter().position(|c| c.state.has_tone())
    }

    /// Move the existing tone onto the slot mark placement selects now.
    pub fn relocate_tone(&mut self) {
        let Some(tone) = self.tone() else {
            return;
        };
        if let Some(pos) = self.find_mark_position() {
            for slot in &mut self.chars {
                slot.state.set_tone(None);
            }
            self.chars[pos].state.set_tone(Some(tone));
        }
    }

    /// Index of the slot that should carry the tone mark, using this
    /// buffer's mark style.
    pub fn find_mark_position(&self) -> Option<usize> {
        self.find_mark_position_with(self.mark_style)
    }

    /// Index of the slot that should carry the tone mark.
    ///
    /// Only the first contiguous vowel run is considered. The rules are
    /// applied in order:
    ///
    /// 1. a leading `u` after `q`, or `i` after `g`, belongs to the initial
    ///    consonant when more vowels follow;
    /// 2. a lone vowel takes the mark;
    /// 3. otherwise the last vowel carrying a modifier takes it;
    /// 4. a two-vowel nucleus marks its second vowel when a consonant
    ///    follows (or, in modern style, for open `oa`/`oe`/`uy`), and its
    ///    first vowel otherwise;
    /// 5. three or more vowels mark the middle one.
    ///
    /// Rule 4 departs from a plain "first of two vowels" reading for closed
    /// syllables: `toán`, not `tóan`.
    pub fn find_mark_position_with(&self, style: MarkStyle) -> Option<usize> {
        let mut start = self.chars.iter().position(TypedCharacter::is_vowel)?;
        let mut end = start;
        while end < self.chars.len() && self.chars[end].is_vowel() {
            end += 1;
        }

        if end - start > 1 && start > 0 {
            let lead = self.chars[start].base;
            let prev = self.chars[start - 1].base;
            if (prev == 'q' && lead == 'u') || (prev == 'g' && lead == 'i') {
                start += 1;
            }
        }

        let run = &self.chars[start..end];
        match run.len() {
            0 => None,
            1 => Some(start),
            n => {
                if let Some(offset) = run.iter().rposition(|c| c.state.has_modifier()) {
                    return Some(start + offset);
                }
                if n > 2 {
                    return Some(start + 1);
                }
                let closed = end < self.chars.len();
                let modern_pair = matches!(
                    (run[0].base, run[1].base),
                    ('o', 'a') | ('o', 'e') | ('u', 'y')
                );
                if closed || (style == MarkStyle::Modern && modern_pair) {
                    Some(start + 1)
                } else {
                    Some(start)
                }
            }
        }
    }
}
