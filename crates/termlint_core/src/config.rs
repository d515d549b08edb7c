//! Linter configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use termlint_rule::Severity;

use crate::LinterError;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../schemas/v1/config.json");

/// Configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".termlint.jsonc", ".termlint.json"];

/// Configuration for the linter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/severity/options) keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleOption>,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Base directory for resolving relative paths.
    /// This is usually the directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Configuration for a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with severity string ("error", "warning", "info"), or "off".
    Severity(String),
    /// Rule is enabled with specific options object.
    Options(Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
            RuleOption::Options(_) => true,
        }
    }

    /// Gets the rule options as JSON value.
    pub fn options(&self) -> Value {
        match self {
            RuleOption::Enabled(_) | RuleOption::Severity(_) => Value::Null,
            RuleOption::Options(v) => v.clone(),
        }
    }

    /// Severity given to the rule's diagnostics.
    pub fn severity(&self) -> Result<Severity, LinterError> {
        match self {
            RuleOption::Severity(s) => s.parse().map_err(LinterError::config),
            _ => Ok(Severity::Error),
        }
    }
}

impl LinterConfig {
    /// Creates a configuration with no rules enabled.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            base_dir: None,
        }
    }

    /// Enables `rule` with the given option.
    pub fn with_rule(mut self, rule: impl Into<String>, option: RuleOption) -> Self {
        self.rules.insert(rule.into(), option);
        self
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.termlint.jsonc`, `.termlint.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_json(&content)?;
        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON or JSONC string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        if let Err(e) = config_validator()?.validate(&value) {
            return Err(LinterError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Returns enabled rules, ordered by name.
    pub fn enabled_rules(&self) -> Vec<(&str, &RuleOption)> {
        self.rules
            .iter()
            .filter(|(_, option)| option.is_enabled())
            .map(|(name, option)| (name.as_str(), option))
            .collect()
    }
}

/// The built-in default: `uppercase-terms` with its default options.
impl Default for LinterConfig {
    fn default() -> Self {
        Self::new().with_rule(
            termlint_rule_uppercase_terms::RULE_ID,
            RuleOption::Enabled(true),
        )
    }
}

fn config_validator() -> Result<&'static Validator, LinterError> {
    static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

    CONFIG_SCHEMA
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(SCHEMA_JSON).map_err(|e| e.to_string())?;
            Validator::new(&schema).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| LinterError::Internal(format!("Invalid embedded config schema: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_config_new() {
        let config = LinterConfig::new();
        assert!(config.rules.is_empty());
        assert!(config.include.is_empty());
        assert!(config.base_dir.is_none());
    }

    #[test]
    fn test_config_default_enables_builtin() {
        let config = LinterConfig::default();
        let enabled = config.enabled_rules();

        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].0, "uppercase-terms");
        assert_eq!(enabled[0].1.options(), Value::Null);
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "rules": {
                "uppercase-terms": { "terms": ["id", "url"] }
            },
            "exclude": ["vendor/**"]
        }"#;
        let config = LinterConfig::from_json(json).unwrap();

        assert_eq!(config.rules.len(), 1);
        assert_eq!(
            config.rules["uppercase-terms"].options(),
            json!({ "terms": ["id", "url"] })
        );
        assert_eq!(config.exclude, vec!["vendor/**"]);
    }

    #[test]
    fn test_config_from_jsonc() {
        let json = r#"{
            // Project terms
            "rules": {
                "uppercase-terms": "warning", /* trailing comma below */
            },
        }"#;
        let config = LinterConfig::from_json(json).unwrap();

        assert_eq!(
            config.rules["uppercase-terms"].severity().unwrap(),
            Severity::Warning
        );
    }

    #[test]
    fn test_config_empty_document() {
        let config = LinterConfig::from_json("").unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_rule_option_enabled() {
        assert!(RuleOption::Enabled(true).is_enabled());
        assert!(!RuleOption::Enabled(false).is_enabled());
        assert!(!RuleOption::Severity("off".to_string()).is_enabled());
        assert!(RuleOption::Severity("error".to_string()).is_enabled());
        assert!(RuleOption::Options(json!({})).is_enabled());
    }

    #[test]
    fn test_rule_option_severity() {
        assert_eq!(RuleOption::Enabled(true).severity().unwrap(), Severity::Error);
        assert_eq!(
            RuleOption::Severity("info".to_string()).severity().unwrap(),
            Severity::Info
        );
        assert!(RuleOption::Severity("fatal".to_string()).severity().is_err());
    }

    #[test]
    fn test_enabled_rules_sorted_by_name() {
        let json = r#"{
            "rules": {
                "b-rule": true,
                "disabled-rule": false,
                "a-rule": { "option": "value" },
                "off-rule": "off"
            }
        }"#;
        let config = LinterConfig::from_json(json).unwrap();
        let names: Vec<&str> = config.enabled_rules().iter().map(|(n, _)| *n).collect();

        assert_eq!(names, vec!["a-rule", "b-rule"]);
    }

    #[test]
    fn test_from_file_sets_base_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".termlint.json");
        std::fs::write(&path, r#"{ "rules": { "uppercase-terms": true } }"#).unwrap();

        let config = LinterConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_from_file_missing() {
        let err = LinterConfig::from_file("/nonexistent/.termlint.json").unwrap_err();
        assert!(matches!(err, LinterError::Config(_)));
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = tempdir().unwrap();
        assert_eq!(LinterConfig::discover(dir.path()), None);

        std::fs::write(dir.path().join(".termlint.json"), "{}").unwrap();
        std::fs::write(dir.path().join(".termlint.jsonc"), "{}").unwrap();

        assert_eq!(
            LinterConfig::discover(dir.path()),
            Some(dir.path().join(".termlint.jsonc"))
        );
    }

    #[rstest]
    #[case::unknown_property(r#"{ "rulez": {} }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "include": "docs/**" }"#, "Config validation failed")]
    #[case::invalid_severity(
        r#"{ "rules": { "uppercase-terms": "fatal" } }"#,
        "Config validation failed"
    )]
    #[case::rule_list(
        r#"{ "rules": { "uppercase-terms": ["id"] } }"#,
        "Config validation failed"
    )]
    #[case::syntax(r#"{ "rules": "#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let err = LinterConfig::from_json(json).unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
