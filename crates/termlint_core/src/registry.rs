//! Built-in rule registry.

use std::collections::BTreeMap;

use serde_json::Value;
use termlint_rule::{Rule, RuleFactory, RuleManifest};
use tracing::{debug, warn};

use crate::LinterError;

/// Maps rule names to the factories that build them.
#[derive(Clone)]
pub struct RuleRegistry {
    factories: BTreeMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built-in rule.
    pub fn with_builtins() -> Self {
        Self::new().with_rule(
            termlint_rule_uppercase_terms::RULE_ID,
            termlint_rule_uppercase_terms::create,
        )
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: RuleFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_rule(mut self, name: impl Into<String>, factory: RuleFactory) -> Self {
        self.register(name, factory);
        self
    }

    /// Returns true if a rule named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Builds the rule `name` from its options.
    pub fn build(&self, name: &str, options: &Value) -> Result<Box<dyn Rule>, LinterError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| LinterError::config(format!("Unknown rule '{}'", name)))?;

        let rule = factory(options)?;
        debug!("Built rule '{}' v{}", name, rule.manifest().version);
        Ok(rule)
    }

    /// Manifests of every registered rule, built with default options.
    pub fn manifests(&self) -> Vec<RuleManifest> {
        self.factories
            .iter()
            .filter_map(|(name, factory)| match factory(&Value::Null) {
                Ok(rule) => Some(rule.manifest().clone()),
                Err(e) => {
                    warn!("Failed to build rule '{}' with defaults: {}", name, e);
                    None
                }
            })
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
