//! Transformations an input method asks the typing buffer to perform.

use crate::char_state::{Modifier, ToneMark};
use crate::typing_buffer::BufferSnapshot;

/// The outcome of mapping one keystroke through an input method.
///
/// "No transformation" is expressed as `None` by the caller; the key is then
/// appended literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    /// Put a tone on the nucleus, replacing any existing tone.
    Tone(ToneMark),
    /// Clear the tone.
    RemoveTone,
    /// Decorate the last slot.
    Modifier(Modifier),
    /// Append a composed character (Telex `w` → `ư`, `[` → `ơ`).
    Standalone(char),
    /// Append the second letter of a doubled-consonant shortcut.
    QuickCombo(char),
    /// Revert to the state before the last transformation.
    Undo(BufferSnapshot),
}

/// Category of an undo-eligible transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformationKind {
    Tone,
    Modifier(Modifier),
    Standalone,
    QuickCombo,
}

impl Transformation {
    /// The undo category, or `None` for an undo itself.
    pub fn kind(&self) -> Option<TransformationKind> {
        match self {
            Transformation::Tone(_) | Transformation::RemoveTone => Some(TransformationKind::Tone),
            Transformation::Modifier(m) => Some(TransformationKind::Modifier(*m)),
            Transformation::Standalone(_) => Some(TransformationKind::Standalone),
            Transformation::QuickCombo(_) => Some(TransformationKind::QuickCombo),
            Transformation::Undo(_) => None,
        }
    }
}
