//! Rule trait, manifest and factory.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use termlint_ast::{NodePath, NodeType};

use crate::{ConfigError, RuleContext};

/// Rule metadata.
///
/// `node_types` is the rule's visitor registration: the host calls
/// [`Rule::visit`] once for every node of one of these types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleManifest {
    /// Unique rule identifier.
    pub name: String,
    /// Rule version (semver).
    pub version: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether this rule can provide auto-fixes.
    #[serde(default)]
    pub fixable: bool,
    /// Node types this rule is interested in.
    #[serde(default)]
    pub node_types: Vec<NodeType>,
}

impl RuleManifest {
    /// Creates a new rule manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
            fixable: false,
            node_types: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the fixable flag.
    pub fn with_fixable(mut self, fixable: bool) -> Self {
        self.fixable = fixable;
        self
    }

    /// Sets the node types this rule handles.
    pub fn with_node_types(mut self, node_types: Vec<NodeType>) -> Self {
        self.node_types = node_types;
        self
    }

    /// Returns true if the rule registered a visitor for `node_type`.
    pub fn handles(&self, node_type: NodeType) -> bool {
        self.node_types.contains(&node_type)
    }
}

/// A configured lint rule.
///
/// Instances are immutable after construction and may be shared between
/// threads; all per-document state lives in the [`RuleContext`].
pub trait Rule: Send + Sync {
    /// Returns the rule metadata.
    fn manifest(&self) -> &RuleManifest;

    /// Visits one node whose type is listed in the manifest's `node_types`.
    ///
    /// `path` gives access to the node and its ancestors for the duration of
    /// the call.
    fn visit(&self, path: &NodePath<'_, '_>, ctx: &mut RuleContext<'_>);
}

/// Builds a rule instance from its JSON options.
pub type RuleFactory = fn(&Value) -> Result<Box<dyn Rule>, ConfigError>;

/// Deserializes rule options, falling back to defaults.
///
/// `null` and booleans (the `"rule": true` shorthand) yield `T::default()`.
/// Missing fields take their `#[serde(default)]` value and unknown fields are
/// ignored.
pub fn parse_options<T>(rule: &str, options: &Value) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match options {
        Value::Null | Value::Bool(_) => Ok(T::default()),
        value => T::deserialize(value).map_err(|source| ConfigError::InvalidOptions {
            rule: rule.to_string(),
            source,
        }),
    }
}
