//! Keystroke engine.
//!
//! The `Engine` owns the typing buffer and the input-method state for one
//! focused text field. Each call to `process_key` takes one key event and
//! returns what the host should do with it: let it through, swallow it, or
//! delete some characters and insert a replacement.
//!
//! Settings are read from a `Copy` snapshot at the start of every key, so a
//! host can flip them between keys without any notification plumbing.

use bitflags::bitflags;
use libvietnamese_core::{
    DefaultSpellChecker, MarkStyle, SpellCheckResult, SpellChecker, Transformation, TypingBuffer,
};
use tracing::{debug, trace, warn};

use crate::config::TelexConfig;
use crate::error::EngineError;
use crate::input_method::{InputMethodKind, InputMethodState, KeyContext};

/// Virtual key code of the Delete (backspace) key.
pub const KEY_DELETE: u16 = 0x33;

bitflags! {
    /// Modifier bits of a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u64 {
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const ALTERNATE = 1 << 19;
        const COMMAND = 1 << 20;

        /// Chords that are shortcuts rather than text input.
        const SHORTCUT = Self::CONTROL.bits() | Self::ALTERNATE.bits() | Self::COMMAND.bits();
    }
}

/// What the host should do with a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineResult {
    /// Deliver the key unchanged.
    PassThrough,
    /// Swallow the key.
    Suppress,
    /// Swallow the key, delete `backspace_count` characters before the
    /// cursor and insert `replacement`.
    Replace {
        backspace_count: usize,
        replacement: String,
    },
}

/// Per-keystroke settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub spell_check_enabled: bool,
    pub restore_if_wrong_spelling: bool,
    pub quick_telex_enabled: bool,
    pub mark_style: MarkStyle,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            spell_check_enabled: true,
            restore_if_wrong_spelling: true,
            quick_telex_enabled: false,
            mark_style: MarkStyle::Traditional,
        }
    }
}

/// Vietnamese composition engine for one input context.
#[derive(Debug, Clone)]
pub struct Engine<S: SpellChecker = DefaultSpellChecker> {
    method: InputMethodKind,
    settings: EngineSettings,
    buffer: TypingBuffer,
    state: InputMethodState,
    spell_checker: S,
}

impl Engine {
    /// Telex with spell checking and restore enabled.
    pub fn new() -> Self {
        Self::with_spell_checker(DefaultSpellChecker::new())
    }

    /// Build an engine from a loaded configuration.
    pub fn from_config(config: &TelexConfig) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.set_input_method(&config.input_method)?;
        engine.set_settings(config.settings());
        Ok(engine)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SpellChecker> Engine<S> {
    pub fn with_spell_checker(spell_checker: S) -> Self {
        let settings = EngineSettings::default();
        Self {
            method: InputMethodKind::default(),
            settings,
            buffer: TypingBuffer::with_mark_style(settings.mark_style),
            state: InputMethodState::new(),
            spell_checker,
        }
    }

    // ========== Configuration ==========

    /// Switch input methods by id ("telex", "simple-telex").
    ///
    /// An unknown id leaves the current method active.
    pub fn set_input_method(&mut self, id: &str) -> Result<(), EngineError> {
        let Some(kind) = InputMethodKind::from_id(id) else {
            warn!(id, "rejected unknown input method");
            return Err(EngineError::UnknownInputMethod(id.to_string()));
        };
        if kind != self.method {
            debug!(from = %self.method, to = %kind, "switching input method");
            self.method = kind;
            self.reset();
        }
        Ok(())
    }

    pub fn input_method(&self) -> InputMethodKind {
        self.method
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: EngineSettings) {
        self.settings = settings;
    }

    pub fn spell_check_enabled(&self) -> bool {
        self.settings.spell_check_enabled
    }

    pub fn set_spell_check_enabled(&mut self, enabled: bool) {
        self.settings.spell_check_enabled = enabled;
    }

    pub fn restore_if_wrong_spelling(&self) -> bool {
        self.settings.restore_if_wrong_spelling
    }

    pub fn set_restore_if_wrong_spelling(&mut self, enabled: bool) {
        self.settings.restore_if_wrong_spelling = enabled;
    }

    pub fn quick_telex_enabled(&self) -> bool {
        self.settings.quick_telex_enabled
    }

    pub fn set_quick_telex_enabled(&mut self, enabled: bool) {
        self.settings.quick_telex_enabled = enabled;
    }

    pub fn mark_style(&self) -> MarkStyle {
        self.settings.mark_style
    }

    pub fn set_mark_style(&mut self, style: MarkStyle) {
        self.settings.mark_style = style;
    }

    // ========== State ==========

    /// The word being composed.
    pub fn buffer(&self) -> &TypingBuffer {
        &self.buffer
    }

    pub fn input_method_state(&self) -> &InputMethodState {
        &self.state
    }

    /// Whether a word is in progress.
    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Drop the current word and all undo state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state.reset();
    }

    // ========== Key processing ==========

    /// Process one key event.
    ///
    /// `character` is the decoded character (`None` for bare modifier
    /// presses); `modifiers` is the event's modifier bitmask.
    pub fn process_key(
        &mut self,
        key_code: u16,
        character: Option<char>,
        modifiers: u64,
    ) -> EngineResult {
        let settings = self.settings;
        self.buffer.set_mark_style(settings.mark_style);

        if KeyModifiers::from_bits_truncate(modifiers).intersects(KeyModifiers::SHORTCUT) {
            self.reset();
            return EngineResult::PassThrough;
        }
        if key_code == KEY_DELETE || matches!(character, Some('\u{8}' | '\u{7f}')) {
            return self.backspace();
        }
        let Some(key) = character else {
            return EngineResult::PassThrough;
        };

        let before = self.buffer.render();
        let context = KeyContext::new(&self.buffer).with_quick_telex(settings.quick_telex_enabled);
        let transformation = self
            .method
            .input_method()
            .process_character(key, &context, &mut self.state);
        trace!(%key, word = %before, ?transformation, "processing key");

        match transformation {
            Some(Transformation::Undo(snapshot)) => {
                self.buffer.undo(&snapshot);
                self.buffer.push(key);
                self.buffer.record_keystroke(key);
                debug!(%key, word = %self.buffer.render(), "undo");
                self.emit(&before, key)
            }
            Some(transformation) => {
                let snapshot = self.buffer.snapshot();
                if !self.buffer.apply(&transformation, key) {
                    return self.append_literal(&before, key);
                }
                match (&transformation, self.buffer.tone_position()) {
                    (Transformation::Tone(_), Some(pos)) => {
                        self.buffer.record_keystroke_for(key, pos)
                    }
                    _ => self.buffer.record_keystroke(key),
                }
                if let Some(kind) = transformation.kind() {
                    self.state.arm(kind, key, snapshot);
                }
                if let Some(result) = self.restore_if_invalid(&before) {
                    return result;
                }
                self.emit(&before, key)
            }
            None => self.append_literal(&before, key),
        }
    }

    /// Feed a string through `process_key` and return the text a host
    /// would display after applying every result.
    pub fn process_str(&mut self, input: &str) -> String {
        let mut text = String::new();
        for ch in input.chars() {
            let is_backspace = matches!(ch, '\u{8}' | '\u{7f}');
            let key_code = if is_backspace { KEY_DELETE } else { 0 };
            match self.process_key(key_code, Some(ch), 0) {
                EngineResult::PassThrough => {
                    if is_backspace {
                        text.pop();
                    } else {
                        text.push(ch);
                    }
                }
                EngineResult::Suppress => {}
                EngineResult::Replace {
                    backspace_count,
                    replacement,
                } => {
                    for _ in 0..backspace_count {
                        text.pop();
                    }
                    text.push_str(&replacement);
                }
            }
        }
        text
    }

    /// Append `key` as typed, or end the word if it is not a letter.
    fn append_literal(&mut self, before: &str, key: char) -> EngineResult {
        if !key.is_alphabetic() {
            return self.finish_word(before, key);
        }
        self.state.disarm();
        self.buffer.push(key);
        self.buffer.record_keystroke(key);
        self.emit(before, key)
    }

    /// Word boundary: validate the finished word, then reset.
    fn finish_word(&mut self, before: &str, key: char) -> EngineResult {
        let settings = self.settings;
        let mut result = EngineResult::PassThrough;
        if settings.spell_check_enabled
            && settings.restore_if_wrong_spelling
            && self.buffer.is_transformed()
        {
            if let SpellCheckResult::Invalid { reason } = self.spell_checker.check(before) {
                let mut replacement = self.buffer.original_keystrokes();
                debug!(word = %before, literal = %replacement, %reason, "restoring at word boundary");
                replacement.push(key);
                result = EngineResult::Replace {
                    backspace_count: before.chars().count(),
                    replacement,
                };
            }
        }
        self.reset();
        result
    }

    /// After a transformation: roll back to the literal keystrokes if the
    /// word is no longer a legal syllable.
    fn restore_if_invalid(&mut self, before: &str) -> Option<EngineResult> {
        let settings = self.settings;
        if !settings.spell_check_enabled || !settings.restore_if_wrong_spelling {
            return None;
        }
        let rendered = self.buffer.render();
        let SpellCheckResult::Invalid { reason } = self.spell_checker.check(&rendered) else {
            return None;
        };
        self.buffer.replace_with_literal();
        self.state.reset();
        let replacement = self.buffer.render();
        debug!(word = %rendered, literal = %replacement, %reason, "restoring invalid word");
        Some(EngineResult::Replace {
            backspace_count: before.chars().count(),
            replacement,
        })
    }

    fn backspace(&mut self) -> EngineResult {
        if self.buffer.is_empty() {
            self.state.reset();
            return EngineResult::PassThrough;
        }
        let before = self.buffer.render();
        self.buffer.pop();
        self.state.reset();
        if self.buffer.is_empty() {
            self.reset();
            return EngineResult::PassThrough;
        }

        let after = self.buffer.render();
        let mut natural = before.clone();
        natural.pop();
        if after == natural {
            return EngineResult::PassThrough;
        }
        diff(&before, &after)
    }

    /// Result for a key whose natural effect would be `before + key`.
    fn emit(&self, before: &str, key: char) -> EngineResult {
        let after = self.buffer.render();
        let mut natural = String::with_capacity(before.len() + key.len_utf8());
        natural.push_str(before);
        natural.push(key);
        if after == natural {
            return EngineResult::PassThrough;
        }
        diff(before, &after)
    }
}

/// Replace only the suffix that changed.
fn diff(before: &str, after: &str) -> EngineResult {
    let prefix = before
        .chars()
        .zip(after.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let backspace_count = before.chars().count() - prefix;
    let replacement: String = after.chars().skip(prefix).collect();
    if backspace_count == 0 && replacement.is_empty() {
        EngineResult::Suppress
    } else {
        EngineResult::Replace {
            backspace_count,
            replacement,
        }
    }
}
