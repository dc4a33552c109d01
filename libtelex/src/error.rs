use thiserror::Error;

/// Errors surfaced to the caller of the engine's configuration API.
///
/// Keystroke processing itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown input method '{0}' (expected one of: telex, simple-telex)")]
    UnknownInputMethod(String),
}
