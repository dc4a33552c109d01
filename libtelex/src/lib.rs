//! libtelex crate root
//!
//! This crate provides the Telex and Simple Telex keystroke conventions and
//! a per-field `Engine` that composes them with the shared
//! `libvietnamese-core` buffer and spell checker.
//!
//! Public API exported here:
//! - `Engine`, `EngineResult`, `EngineSettings` from `engine`
//! - `InputMethod`, `InputMethodKind`, `InputMethodState` from `input_method`
//! - `Telex` and `SimpleTelex`
//! - `TelexConfig` from `config`
//!
//! ```rust
//! use libtelex::Engine;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.process_str("tieengs Vieetj"), "tiếng Việt");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod input_method;
pub mod quick_telex;
pub mod simple_telex;
pub mod telex;

// Re-export core types callers need alongside the engine.
pub use libvietnamese_core::{
    Config, DefaultSpellChecker, MarkStyle, Modifier, SpellCheckResult, SpellChecker,
    SyllableParser, SyllableParts, ToneMark, Transformation, TransformationKind, TypingBuffer,
};

// Convenience re-exports for common types used by callers.
pub use config::TelexConfig;
pub use engine::{Engine, EngineResult, EngineSettings, KeyModifiers, KEY_DELETE};
pub use error::EngineError;
pub use input_method::{InputMethod, InputMethodKind, InputMethodState, KeyContext, LastTransformation};
pub use simple_telex::SimpleTelex;
pub use telex::Telex;
