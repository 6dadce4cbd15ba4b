//! Feature registry
//!
//! Explicit list of every available feature, built once at startup and
//! shared read-only afterwards. Declaration order is significant: it breaks
//! ties when ordering features for application.

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::ApplicationType;

use super::dekorate::{Dekorate, DekorateFlavor};
use super::micrometer::{Dynatrace, MicrometerCore};
use super::other::{Management, ShadePlugin};
use super::{Feature, FeatureRef};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Feature name must not be empty")]
    EmptyName,

    #[error("Feature already registered: {0}")]
    DuplicateName(String),

    #[error("Feature '{feature}' requires unknown feature '{requires}'")]
    MissingRequirement { feature: String, requires: String },

    #[error("Feature requirements form a cycle: {}", .0.join(", "))]
    RequirementCycle(Vec<String>),
}

/// Registered features, in declaration order
#[derive(Default)]
pub struct FeatureRegistry {
    features: Vec<FeatureRef>,

    /// Map from feature name to position in `features`
    index: HashMap<String, usize>,
}

impl FeatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in feature
    pub fn builtin() -> Self {
        let mut features: Vec<FeatureRef> = DekorateFlavor::ALL
            .into_iter()
            .map(|flavor| Arc::new(Dekorate::new(flavor)) as FeatureRef)
            .collect();
        features.push(Arc::new(MicrometerCore));
        features.push(Arc::new(Management));
        features.push(Arc::new(Dynatrace));
        features.push(Arc::new(ShadePlugin));

        let index = features
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect();

        Self { features, index }
    }

    /// Registers a feature
    pub fn register(&mut self, feature: impl Feature + 'static) -> Result<(), RegistryError> {
        self.register_arc(Arc::new(feature))
    }

    /// Registers an already shared feature
    pub fn register_arc(&mut self, feature: FeatureRef) -> Result<(), RegistryError> {
        let name = feature.name();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.index.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        self.index.insert(name.to_string(), self.features.len());
        self.features.push(feature);
        Ok(())
    }

    /// Checks that every requirement exists and that requirements are acyclic
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut graph = DiGraph::<usize, ()>::with_capacity(self.features.len(), 0);
        let nodes: Vec<_> = (0..self.features.len()).map(|i| graph.add_node(i)).collect();

        for (i, feature) in self.features.iter().enumerate() {
            for required in feature.required_features() {
                let Some(&req) = self.index.get(*required) else {
                    return Err(RegistryError::MissingRequirement {
                        feature: feature.name().to_string(),
                        requires: required.to_string(),
                    });
                };
                graph.add_edge(nodes[req], nodes[i], ());
            }
        }

        for component in tarjan_scc(&graph) {
            let self_loop = component.len() == 1 && graph.contains_edge(component[0], component[0]);
            if component.len() > 1 || self_loop {
                let mut names: Vec<_> = component
                    .iter()
                    .map(|n| self.features[graph[*n]].name().to_string())
                    .collect();
                names.sort();
                return Err(RegistryError::RequirementCycle(names));
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FeatureRef> {
        self.index.get(name).map(|&i| &self.features[i])
    }

    /// Declaration position of a feature
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn at(&self, position: usize) -> &FeatureRef {
        &self.features[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRef> {
        self.features.iter()
    }

    /// Features usable with an application type
    pub fn supporting(
        &self,
        application_type: ApplicationType,
    ) -> impl Iterator<Item = &FeatureRef> {
        self.features
            .iter()
            .filter(move |f| f.supports(application_type))
    }

    /// Features that may be included without being selected
    pub fn default_features(&self) -> impl Iterator<Item = &FeatureRef> {
        self.features
            .iter()
            .filter(|f| f.as_default_feature().is_some())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
