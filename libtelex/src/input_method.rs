//! Input method contract, undo state and the static registry.
//!
//! An input method maps one keystroke plus the current word to an optional
//! `Transformation`. The small undo/disable state lives in
//! `InputMethodState`, owned by the engine and passed in by mutable
//! reference on every call.

use std::fmt;
use std::str::FromStr;

use libvietnamese_core::{BufferSnapshot, Transformation, TransformationKind, TypingBuffer};
use phf::phf_map;

use crate::error::EngineError;
use crate::simple_telex::SimpleTelex;
use crate::telex::Telex;

/// What an input method may look at while deciding.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    /// The word composed so far (before this key).
    pub buffer: &'a TypingBuffer,
    /// Whether doubled-consonant shortcuts are active.
    pub quick_telex: bool,
}

impl<'a> KeyContext<'a> {
    pub fn new(buffer: &'a TypingBuffer) -> Self {
        Self {
            buffer,
            quick_telex: false,
        }
    }

    pub fn with_quick_telex(mut self, enabled: bool) -> Self {
        self.quick_telex = enabled;
        self
    }
}

/// The transformation that may still be undone by repeating its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastTransformation {
    pub kind: TransformationKind,
    /// Lowercase trigger key.
    pub trigger: char,
    /// Buffer state before the transformation.
    pub snapshot: BufferSnapshot,
}

/// At most one armed transformation and at most one disabled key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputMethodState {
    last: Option<LastTransformation>,
    disabled: Option<char>,
}

fn fold(key: char) -> char {
    key.to_lowercase().next().unwrap_or(key)
}

impl InputMethodState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything (word boundary, focus change).
    pub fn reset(&mut self) {
        self.last = None;
        self.disabled = None;
    }

    pub fn last(&self) -> Option<&LastTransformation> {
        self.last.as_ref()
    }

    /// Make `trigger` undo-eligible, replacing whatever was armed.
    pub fn arm(&mut self, kind: TransformationKind, trigger: char, snapshot: BufferSnapshot) {
        self.last = Some(LastTransformation {
            kind,
            trigger: fold(trigger),
            snapshot,
        });
    }

    pub fn disarm(&mut self) {
        self.last = None;
    }

    pub fn disabled_key(&self) -> Option<char> {
        self.disabled
    }

    pub fn is_disabled(&self, key: char) -> bool {
        self.disabled == Some(fold(key))
    }

    pub fn disable_key(&mut self, key: char) {
        self.disabled = Some(fold(key));
    }

    /// Clear the disabled key if `key` is a different one.
    pub fn observe_key(&mut self, key: char) {
        if self.disabled.is_some_and(|d| d != fold(key)) {
            self.disabled = None;
        }
    }

    /// If `key` repeats the armed trigger, consume it and return the undo.
    ///
    /// The trigger becomes disabled so a third press appends literally.
    pub fn take_undo(&mut self, key: char) -> Option<Transformation> {
        let key = fold(key);
        if self.last.as_ref()?.trigger != key {
            return None;
        }
        let last = self.last.take()?;
        self.disabled = Some(key);
        Some(Transformation::Undo(last.snapshot))
    }
}

/// A keystroke convention for composing Vietnamese.
pub trait InputMethod {
    /// Display name ("Telex").
    fn name(&self) -> &'static str;

    /// Registry id ("telex").
    fn id(&self) -> &'static str;

    /// Map one key to a transformation, or `None` to append it literally.
    fn process_character(
        &self,
        key: char,
        context: &KeyContext<'_>,
        state: &mut InputMethodState,
    ) -> Option<Transformation>;

    /// Whether `key` can ever trigger a transformation.
    fn is_special_key(&self, key: char) -> bool;
}

/// The closed set of supported input methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMethodKind {
    #[default]
    Telex,
    SimpleTelex,
}

static INPUT_METHODS: phf::Map<&'static str, InputMethodKind> = phf_map! {
    "telex" => InputMethodKind::Telex,
    "simple-telex" => InputMethodKind::SimpleTelex,
};

static TELEX: Telex = Telex;
static SIMPLE_TELEX: SimpleTelex = SimpleTelex;

impl InputMethodKind {
    pub const ALL: [InputMethodKind; 2] = [InputMethodKind::Telex, InputMethodKind::SimpleTelex];

    /// Look up an id case-insensitively.
    pub fn from_id(id: &str) -> Option<Self> {
        INPUT_METHODS.get(id.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn id(self) -> &'static str {
        self.input_method().id()
    }

    pub fn name(self) -> &'static str {
        self.input_method().name()
    }

    /// The shared rule set for this method.
    pub fn input_method(self) -> &'static dyn InputMethod {
        match self {
            InputMethodKind::Telex => &TELEX,
            InputMethodKind::SimpleTelex => &SIMPLE_TELEX,
        }
    }
}

impl FromStr for InputMethodKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| EngineError::UnknownInputMethod(s.to_string()))
    }
}

impl fmt::Display for InputMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
