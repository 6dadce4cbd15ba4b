//! Generation context
//!
//! The mutable accumulator a single generation request passes to every
//! applied feature. It owns the configuration entries and the dependency
//! declarations; the output layer reads it once all features have run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{ApplicationType, Dependency, Options, Scope, TestFramework};

/// A configuration value
///
/// `${ENV_VAR}` placeholders are kept as plain strings and resolved at
/// runtime by the generated application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// Context for one generation request
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorContext {
    project_name: String,
    application_type: ApplicationType,
    options: Options,

    /// Names of applied features, in application order
    features: Vec<String>,

    /// Dot-delimited keys; a later write to the same key replaces the value
    configuration: BTreeMap<String, ConfigValue>,

    /// Unique by (group, artifact, scope), in insertion order
    dependencies: Vec<Dependency>,
}

impl GeneratorContext {
    /// Creates an empty context for a project
    pub fn new(
        project_name: impl Into<String>,
        application_type: ApplicationType,
        options: Options,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            application_type,
            options,
            features: Vec::new(),
            configuration: BTreeMap::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn application_type(&self) -> ApplicationType {
        self.application_type
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn test_framework(&self) -> TestFramework {
        self.options.test_framework
    }

    /// Sets a configuration entry, returning the value it replaced
    pub fn put_configuration(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.configuration.insert(key.into(), value.into())
    }

    pub fn configuration(&self) -> &BTreeMap<String, ConfigValue> {
        &self.configuration
    }

    pub fn get_configuration(&self, key: &str) -> Option<&ConfigValue> {
        self.configuration.get(key)
    }

    /// Adds a dependency; returns false if an identical one is already present
    pub fn add_dependency(&mut self, dependency: Dependency) -> bool {
        if self.dependencies.contains(&dependency) {
            false
        } else {
            self.dependencies.push(dependency);
            true
        }
    }

    /// Adds a test compile dependency looked up by artifact name
    pub fn add_test_dependency(&mut self, name: impl Into<String>) -> bool {
        self.add_dependency(Dependency::named(name, Scope::TestCompile))
    }

    /// Adds a test runtime dependency looked up by artifact name
    pub fn add_test_runtime_dependency(&mut self, name: impl Into<String>) -> bool {
        self.add_dependency(Dependency::named(name, Scope::TestRuntime))
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Dependencies declared in the given scope
    pub fn dependencies_in(&self, scope: Scope) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(move |d| d.scope == scope)
    }

    /// Returns true if a dependency with this artifact exists in any scope
    pub fn has_dependency(&self, artifact_id: &str) -> bool {
        self.dependencies.iter().any(|d| d.artifact_id == artifact_id)
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub(crate) fn record_feature(&mut self, name: &str) {
        self.features.push(name.to_string());
    }
}
