//! Localization Resource
//!
//! Questionnaire text, option chips, greetings and fallback messages keyed by
//! language. Lookups never fail: a language (or a single step) without an
//! entry silently resolves to the default language.
//!
//! Tables can be replaced from YAML:
//!
//! ```yaml
//! default_language: English
//! languages:
//!   English:
//!     greeting: "Hello! ..."
//!     fallback_error: "Sorry, ..."
//!     steps:
//!       1:
//!         question: "What type of business interests you?"
//!         options:
//!           - { key: A, label: "Food & Beverage", description: "Restaurants, cafes" }
//! ```

use franchise_assistant_core::{GuidedStep, Language};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::ConfigError;

mod packs;

/// A selectable chip in the guided questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl QuestionOption {
    pub fn new(key: &str, label: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }

    /// Text recorded as the user's turn, e.g. `A: Food & Beverage`
    pub fn selection_text(&self) -> String {
        format!("{}: {}", self.key, self.label)
    }
}

/// Question and ordered options for one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepText {
    pub question: String,
    pub options: Vec<QuestionOption>,
}

/// All strings for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    /// First assistant message, introduces step 1
    pub greeting: String,
    /// Assistant message shown when the model call fails
    pub fallback_error: String,
    /// Steps keyed by ordinal; missing steps use the default language
    #[serde(default)]
    pub steps: BTreeMap<u8, StepText>,
}

/// Localization tables for every configured language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizationConfig {
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub languages: BTreeMap<String, LanguagePack>,
}

fn default_language() -> String {
    Language::DEFAULT.display_name().to_string()
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: packs::builtin(),
        }
    }
}

impl LocalizationConfig {
    /// Load tables from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                message: e.to_string(),
            }
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate tables from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the guarantees lookups rely on.
    ///
    /// The default language must have a greeting, a fallback and a non-empty
    /// option set for every step; keys must be unique within each step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let default = self.languages.get(&self.default_language).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "default language '{}' has no entries",
                self.default_language
            ))
        })?;

        if default.greeting.trim().is_empty() || default.fallback_error.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "default language '{}' needs a greeting and a fallback message",
                self.default_language
            )));
        }

        for step in GuidedStep::all() {
            let has_options = default
                .steps
                .get(&step.ordinal())
                .map(|s| !s.options.is_empty())
                .unwrap_or(false);
            if !has_options {
                return Err(ConfigError::Invalid(format!(
                    "default language '{}' has no options for step {}",
                    self.default_language, step
                )));
            }
        }

        for (language, pack) in &self.languages {
            for (ordinal, step) in &pack.steps {
                if GuidedStep::new(*ordinal).is_none() {
                    return Err(ConfigError::Invalid(format!(
                        "{}: step {} is outside 1-4",
                        language, ordinal
                    )));
                }
                let mut seen = HashSet::new();
                for option in &step.options {
                    if !seen.insert(option.key.trim().to_ascii_uppercase()) {
                        return Err(ConfigError::Invalid(format!(
                            "{}: duplicate option key '{}' in step {}",
                            language, option.key, ordinal
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Supported languages that lack their own text for some step.
    ///
    /// Such a session would show default-language chips after a native
    /// greeting.
    pub fn incomplete_languages(&self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|lang| {
                GuidedStep::all().any(|step| !self.has_step(step, lang.display_name()))
            })
            .collect()
    }

    /// Identifiers of every configured language
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(|k| k.as_str()).collect()
    }

    /// Question shown above the chips of `step`
    pub fn question_text(&self, step: GuidedStep, language: &str) -> &str {
        self.step_text(step, language)
            .map(|s| s.question.as_str())
            .unwrap_or_default()
    }

    /// Ordered options of `step`
    pub fn options(&self, step: GuidedStep, language: &str) -> &[QuestionOption] {
        self.step_text(step, language)
            .map(|s| s.options.as_slice())
            .unwrap_or_default()
    }

    /// Option of `step` with the given key
    pub fn option(&self, step: GuidedStep, language: &str, key: &str) -> Option<&QuestionOption> {
        self.options(step, language)
            .iter()
            .find(|o| o.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Initial assistant message
    pub fn greeting(&self, language: &str) -> &str {
        self.pack(language)
            .map(|p| p.greeting.as_str())
            .filter(|g| !g.is_empty())
            .or_else(|| self.default_pack().map(|p| p.greeting.as_str()))
            .unwrap_or_default()
    }

    /// Assistant message used when the model call fails
    pub fn fallback_error_text(&self, language: &str) -> &str {
        self.pack(language)
            .map(|p| p.fallback_error.as_str())
            .filter(|f| !f.is_empty())
            .or_else(|| self.default_pack().map(|p| p.fallback_error.as_str()))
            .unwrap_or_default()
    }

    /// Whether `language` has its own entry for `step`
    pub fn has_step(&self, step: GuidedStep, language: &str) -> bool {
        self.pack(language)
            .and_then(|p| p.steps.get(&step.ordinal()))
            .is_some_and(|s| !s.options.is_empty())
    }

    fn step_text(&self, step: GuidedStep, language: &str) -> Option<&StepText> {
        self.pack(language)
            .and_then(|p| p.steps.get(&step.ordinal()))
            .filter(|s| !s.options.is_empty())
            .or_else(|| {
                self.default_pack()
                    .and_then(|p| p.steps.get(&step.ordinal()))
            })
    }

    fn default_pack(&self) -> Option<&LanguagePack> {
        self.languages.get(&self.default_language)
    }

    /// Resolve an identifier to a configured pack.
    ///
    /// Accepts the table key (any ASCII case) or anything
    /// [`Language::from_identifier`] understands.
    fn pack(&self, language: &str) -> Option<&LanguagePack> {
        let needle = language.trim();
        if let Some(pack) = self.languages.get(needle) {
            return Some(pack);
        }
        if let Some(pack) = self
            .languages
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(needle))
            .map(|(_, pack)| pack)
        {
            return Some(pack);
        }
        Language::from_identifier(needle).and_then(|lang| self.languages.get(lang.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn step(n: u8) -> GuidedStep {
        GuidedStep::new(n).unwrap()
    }

    #[test]
    fn test_default_tables_are_valid() {
        let config = LocalizationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_language, "English");
        assert!(config.languages().contains(&"Hindi"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let config = LocalizationConfig::default();
        for s in GuidedStep::all() {
            assert_eq!(config.options(s, "Klingon"), config.options(s, "English"));
            assert_eq!(config.question_text(s, "Klingon"), config.question_text(s, "English"));
        }
        assert_eq!(config.greeting("Klingon"), config.greeting("English"));
        assert_eq!(
            config.fallback_error_text("Klingon"),
            config.fallback_error_text("English")
        );
    }

    #[test]
    fn test_every_supported_language_is_complete() {
        let config = LocalizationConfig::default();
        assert!(config.incomplete_languages().is_empty());

        let english = config.options(step(1), "English");
        for lang in Language::all().iter().filter(|l| **l != Language::English) {
            let name = lang.display_name();
            assert_ne!(config.greeting(name), config.greeting("English"), "{name}");
            for s in GuidedStep::all() {
                let options = config.options(s, name);
                assert_ne!(config.question_text(s, name), config.question_text(s, "English"));
                assert_eq!(
                    config.options(s, "English").len(),
                    options.len(),
                    "{name} step {s}"
                );
            }
            assert_ne!(config.options(step(1), name)[0].label, english[0].label, "{name}");
        }
    }

    #[test]
    fn test_partial_pack_reported_incomplete() {
        let mut config = LocalizationConfig::default();
        if let Some(tamil) = config.languages.get_mut("Tamil") {
            tamil.steps.remove(&2);
        }
        assert_eq!(config.incomplete_languages(), vec![Language::Tamil]);
        assert_eq!(config.options(step(2), "Tamil"), config.options(step(2), "English"));
    }

    #[test]
    fn test_hindi_has_own_strings() {
        let config = LocalizationConfig::default();
        let hindi = config.options(step(1), "Hindi");
        let english = config.options(step(1), "English");
        assert_eq!(hindi.len(), english.len());
        assert_ne!(hindi[0].label, english[0].label);
        assert!(config.greeting("Hindi").starts_with("नमस्ते"));
        assert!(config.fallback_error_text("hi").contains("क्षमा करें"));
    }

    #[test]
    fn test_identifier_resolution_ignores_case() {
        let config = LocalizationConfig::default();
        assert_eq!(config.greeting("hindi"), config.greeting("Hindi"));
        assert_eq!(config.greeting("HI"), config.greeting("Hindi"));
    }

    #[test]
    fn test_option_lookup_by_key() {
        let config = LocalizationConfig::default();
        let option = config.option(step(1), "English", "a").unwrap();
        assert_eq!(option.label, "Food & Beverage");
        assert_eq!(option.selection_text(), "A: Food & Beverage");
        assert!(config.option(step(3), "English", "Z").is_none());
    }

    #[test]
    fn test_keys_unique_within_every_step() {
        let config = LocalizationConfig::default();
        for language in config.languages() {
            for s in GuidedStep::all() {
                let options = config.options(s, language);
                let keys: HashSet<_> = options.iter().map(|o| o.key.as_str()).collect();
                assert_eq!(keys.len(), options.len(), "{} step {}", language, s);
                assert!(!options.is_empty());
            }
        }
    }

    #[test]
    fn test_partial_language_falls_back_per_step() {
        let yaml = r#"
languages:
  English:
    greeting: "Hello"
    fallback_error: "Oops"
    steps:
      1: { question: "Q1", options: [{ key: A, label: "One" }] }
      2: { question: "Q2", options: [{ key: A, label: "Two" }] }
      3: { question: "Q3", options: [{ key: A, label: "Three" }] }
      4: { question: "Q4", options: [{ key: A, label: "Four" }] }
  Hindi:
    greeting: "नमस्ते"
    fallback_error: "क्षमा करें"
    steps:
      1: { question: "प्रश्न 1", options: [{ key: A, label: "एक" }] }
"#;
        let config = LocalizationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.question_text(step(1), "Hindi"), "प्रश्न 1");
        assert_eq!(config.question_text(step(3), "Hindi"), "Q3");
        assert_eq!(config.options(step(4), "Hindi")[0].label, "Four");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let yaml = r#"
languages:
  English:
    greeting: "Hello"
    fallback_error: "Oops"
    steps:
      1: { question: "Q1", options: [{ key: A, label: "One" }, { key: A, label: "Uno" }] }
      2: { question: "Q2", options: [{ key: A, label: "Two" }] }
      3: { question: "Q3", options: [{ key: A, label: "Three" }] }
      4: { question: "Q4", options: [{ key: A, label: "Four" }] }
"#;
        let err = LocalizationConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate option key"));
    }

    #[test]
    fn test_keys_differing_only_in_case_rejected() {
        let yaml = r#"
languages:
  English:
    greeting: "Hello"
    fallback_error: "Oops"
    steps:
      1: { question: "Q1", options: [{ key: a, label: "One" }, { key: A, label: "Uno" }] }
      2: { question: "Q2", options: [{ key: A, label: "Two" }] }
      3: { question: "Q3", options: [{ key: A, label: "Three" }] }
      4: { question: "Q4", options: [{ key: A, label: "Four" }] }
"#;
        let err = LocalizationConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate option key 'A'"));
    }

    #[test]
    fn test_missing_default_step_rejected() {
        let yaml = r#"
languages:
  English:
    greeting: "Hello"
    fallback_error: "Oops"
    steps:
      1: { question: "Q1", options: [{ key: A, label: "One" }] }
"#;
        let err = LocalizationConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let yaml = serde_yaml::to_string(&LocalizationConfig::default()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = LocalizationConfig::load(file.path()).unwrap();
        assert_eq!(loaded.greeting("Hindi"), LocalizationConfig::default().greeting("Hindi"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LocalizationConfig::load("/nonexistent/localization.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
