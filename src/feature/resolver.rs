//! Feature selection
//!
//! Turns the features a user asked for into the ordered list the generator
//! applies:
//!
//! 1. Every selected name must exist and support the application type.
//! 2. Required features are added transitively.
//! 3. Default features whose predicate holds for the selection so far are
//!    added, with their requirements. A default whose requirements are
//!    unknown or unsupported for the application type is skipped.
//! 4. The result is ordered requirements-first; ties keep registry
//!    declaration order.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};
use thiserror::Error;

use crate::domain::{ApplicationType, Options};

use super::registry::FeatureRegistry;
use super::FeatureRef;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Feature '{feature}' does not support application type '{application_type}'")]
    NotSupported {
        feature: String,
        application_type: ApplicationType,
    },

    #[error("Feature requirements form a cycle: {}", .0.join(", "))]
    RequirementCycle(Vec<String>),
}

/// Resolves selections against a registry
pub struct FeatureResolver<'a> {
    registry: &'a FeatureRegistry,
}

impl<'a> FeatureResolver<'a> {
    pub fn new(registry: &'a FeatureRegistry) -> Self {
        Self { registry }
    }

    /// Returns the features to apply, in application order
    pub fn resolve<S: AsRef<str>>(
        &self,
        application_type: ApplicationType,
        options: &Options,
        selected: &[S],
    ) -> Result<Vec<FeatureRef>, SelectionError> {
        let mut included = BTreeSet::new();

        for name in selected {
            self.include(name.as_ref(), application_type, &mut included)?;
        }

        let chosen: Vec<FeatureRef> = included
            .iter()
            .map(|&i| self.registry.at(i).clone())
            .collect();

        let mut defaults = Vec::new();
        for (i, feature) in self.registry.iter().enumerate() {
            if included.contains(&i) || !feature.supports(application_type) {
                continue;
            }
            if let Some(auto) = feature.as_default_feature() {
                if auto.should_apply(application_type, options, &chosen) {
                    defaults.push(feature.name().to_string());
                }
            }
        }
        for name in &defaults {
            let mut candidate = included.clone();
            if self.include(name, application_type, &mut candidate).is_ok() {
                included = candidate;
            }
        }

        self.order(&included)
    }

    /// Adds a feature and its requirements to the set
    fn include(
        &self,
        name: &str,
        application_type: ApplicationType,
        included: &mut BTreeSet<usize>,
    ) -> Result<(), SelectionError> {
        let mut pending = vec![name.to_string()];

        while let Some(name) = pending.pop() {
            let position = self
                .registry
                .position(&name)
                .ok_or_else(|| SelectionError::UnknownFeature(name.clone()))?;
            let feature = self.registry.at(position);

            if !feature.supports(application_type) {
                return Err(SelectionError::NotSupported {
                    feature: name,
                    application_type,
                });
            }

            if included.insert(position) {
                pending.extend(feature.required_features().iter().map(|r| r.to_string()));
            }
        }

        Ok(())
    }

    /// Topological order over requirement edges, lowest position first
    fn order(&self, included: &BTreeSet<usize>) -> Result<Vec<FeatureRef>, SelectionError> {
        let mut graph = DiGraph::<usize, ()>::new();
        let nodes: HashMap<usize, NodeIndex> = included
            .iter()
            .map(|&i| (i, graph.add_node(i)))
            .collect();

        for (&i, &node) in &nodes {
            for required in self.registry.at(i).required_features() {
                if let Some(req) = self.registry.position(required).and_then(|p| nodes.get(&p)) {
                    graph.update_edge(*req, node, ());
                }
            }
        }

        let mut in_degree: HashMap<NodeIndex, usize> = graph
            .node_indices()
            .map(|n| (n, graph.neighbors_directed(n, Direction::Incoming).count()))
            .collect();

        let mut ready: BinaryHeap<Reverse<(usize, NodeIndex)>> = in_degree
            .iter()
            .filter(|(_, deg)| **deg == 0)
            .map(|(&n, _)| Reverse((graph[n], n)))
            .collect();

        let mut ordered = Vec::with_capacity(included.len());
        while let Some(Reverse((position, node))) = ready.pop() {
            ordered.push(self.registry.at(position).clone());

            for next in graph.neighbors_directed(node, Direction::Outgoing) {
                if let Some(deg) = in_degree.get_mut(&next) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.push(Reverse((graph[next], next)));
                    }
                }
            }
        }

        if ordered.len() < included.len() {
            let mut stuck: Vec<_> = in_degree
                .iter()
                .filter(|(_, deg)| **deg > 0)
                .map(|(&n, _)| self.registry.at(graph[n]).name().to_string())
                .collect();
            stuck.sort();
            return Err(SelectionError::RequirementCycle(stuck));
        }

        Ok(ordered)
    }
}
