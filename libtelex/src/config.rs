use serde::{Deserialize, Serialize};

use crate::engine::EngineSettings;

/// Telex-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libvietnamese_core::Config` (flattened via serde)
/// - The active input method id ("telex" or "simple-telex")
/// - The quick telex consonant shortcuts
///
/// # Example
///
/// ```rust
/// use libtelex::TelexConfig;
///
/// let config = TelexConfig::from_toml_str(
///     "input_method = \"simple-telex\"\nrestore_if_wrong_spelling = false",
/// )
/// .unwrap();
/// assert_eq!(config.input_method, "simple-telex");
/// assert!(!config.base().restore_if_wrong_spelling);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TelexConfig {
    /// Base configuration fields (spell check, restore, orthography)
    #[serde(flatten)]
    pub base: libvietnamese_core::Config,

    /// Input method id, see `InputMethodKind::from_id`
    pub input_method: String,

    /// cc→ch, gg→gi, kk→kh, ngg→ngh, nn→ng, pp→ph, qq→qu, tt→th
    pub quick_telex_enabled: bool,
}

impl Default for TelexConfig {
    fn default() -> Self {
        Self {
            base: libvietnamese_core::Config::default(),
            input_method: "telex".to_string(),
            quick_telex_enabled: false,
        }
    }
}

impl TelexConfig {
    /// Convert this telex config into the base config
    pub fn into_base(self) -> libvietnamese_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libvietnamese_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libvietnamese_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The per-keystroke settings snapshot this config describes.
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            spell_check_enabled: self.base.spell_check_enabled,
            restore_if_wrong_spelling: self.base.restore_if_wrong_spelling,
            quick_telex_enabled: self.quick_telex_enabled,
            mark_style: self.base.mark_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libvietnamese_core::MarkStyle;

    #[test]
    fn defaults() {
        let config = TelexConfig::default();
        assert_eq!(config.input_method, "telex");
        assert!(!config.quick_telex_enabled);
        assert!(config.base().spell_check_enabled);
        assert!(config.base().restore_if_wrong_spelling);
    }

    #[test]
    fn flattened_toml() {
        let config = TelexConfig::from_toml_str(
            "input_method = \"simple-telex\"\nquick_telex_enabled = true\nmodern_orthography = true\n",
        )
        .unwrap();
        assert_eq!(config.input_method, "simple-telex");
        assert!(config.quick_telex_enabled);
        assert!(config.base.modern_orthography);
        assert!(config.base.spell_check_enabled);

        let settings = config.settings();
        assert!(settings.quick_telex_enabled);
        assert_eq!(settings.mark_style, MarkStyle::Modern);
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = TelexConfig::default();
        config.base_mut().spell_check_enabled = false;
        let text = config.to_toml_string().unwrap();
        assert_eq!(TelexConfig::from_toml_str(&text).unwrap(), config);
        assert!(!config.into_base().spell_check_enabled);
    }
}
