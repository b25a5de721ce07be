//! Linter configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{LinterError, Rule, Severity};

/// File name looked up when no configuration path is given.
pub const CONFIG_FILE_NAME: &str = ".mdr.json";

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for the linter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Editor schema hint; ignored by the linter.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Per-rule settings keyed by rule id. Rules not listed run at their
    /// default severity.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

/// Setting for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule runs at the given level ("error", "warning", "off").
    Level(RuleLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warning,
    Off,
}

impl LinterConfig {
    /// Creates a configuration with every rule at its default severity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parses configuration from JSON string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        // Parse into Value first for validation
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?;

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LinterError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            info!("Found config: {}", candidate.display());
            Some(candidate)
        } else {
            None
        }
    }

    /// Returns the severity `rule` reports with, or `None` if it is disabled.
    pub fn severity_for(&self, rule: Rule) -> Option<Severity> {
        match self.rules.get(rule.id()) {
            None | Some(RuleSetting::Enabled(true)) => Some(rule.default_severity()),
            Some(RuleSetting::Enabled(false)) | Some(RuleSetting::Level(RuleLevel::Off)) => None,
            Some(RuleSetting::Level(RuleLevel::Error)) => Some(Severity::Error),
            Some(RuleSetting::Level(RuleLevel::Warning)) => Some(Severity::Warning),
        }
    }

    /// Returns the rules that will run, in execution order.
    pub fn enabled_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| self.severity_for(*rule).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_config_default_enables_everything() {
        let config = LinterConfig::new();

        assert!(config.rules.is_empty());
        assert_eq!(config.enabled_rules(), Rule::ALL.to_vec());
        for rule in Rule::ALL {
            assert_eq!(config.severity_for(rule), Some(rule.default_severity()));
        }
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "$schema": "https://example.com/schema.json",
            "rules": {
                "trailing-whitespace": false,
                "empty-link": "warning",
                "duplicate-heading": "off",
                "heading-hierarchy": "error",
                "no-empty-sections": true
            }
        }"#;

        let config = LinterConfig::from_json(json).unwrap();

        assert_eq!(config.rules.len(), 5);
        assert_eq!(config.severity_for(Rule::TrailingWhitespace), None);
        assert_eq!(config.severity_for(Rule::EmptyLink), Some(Severity::Warning));
        assert_eq!(config.severity_for(Rule::DuplicateHeading), None);
        assert_eq!(
            config.severity_for(Rule::HeadingHierarchy),
            Some(Severity::Error)
        );
        assert_eq!(
            config.severity_for(Rule::EmptySections),
            Some(Severity::Warning)
        );
        assert_eq!(
            config.enabled_rules(),
            vec![Rule::HeadingHierarchy, Rule::EmptyLink, Rule::EmptySections]
        );
    }

    #[test]
    fn test_empty_object_is_valid() {
        assert_eq!(LinterConfig::from_json("{}").unwrap(), LinterConfig::new());
    }

    #[rstest]
    #[case::unknown_property(r#"{ "ruless": {} }"#, "Config validation failed")]
    #[case::unknown_rule(r#"{ "rules": { "no-such-rule": true } }"#, "Config validation failed")]
    #[case::invalid_level(
        r#"{ "rules": { "empty-link": "fatal" } }"#,
        "Config validation failed"
    )]
    #[case::type_mismatch(r#"{ "rules": [] }"#, "Config validation failed")]
    #[case::not_json(r#"{ "rules": "#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = LinterConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_from_file_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(LinterConfig::discover(dir.path()), None);

        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "rules": { "empty-link": "off" } }"#).unwrap();

        let found = LinterConfig::discover(dir.path()).unwrap();
        assert_eq!(found, path);

        let config = LinterConfig::from_file(found).unwrap();
        assert_eq!(config.severity_for(Rule::EmptyLink), None);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinterConfig::from_file(dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, LinterError::Config(_)));
        assert!(err.to_string().contains("Failed to read config"));
    }
}
