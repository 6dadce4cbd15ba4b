//! # Features
//!
//! A feature is a unit of optional functionality for a generated project.
//! When applied it contributes build dependencies and configuration to the
//! request's [`GeneratorContext`].
//!
//! ## Contract
//!
//! | Operation | Side effects | Default |
//! |-----------|--------------|---------|
//! | `name` | none | required, unique, non-empty |
//! | `category` | none | required |
//! | `supports` | none | required |
//! | `is_preview` / `is_visible` | none | `false` / `true` |
//! | `*_documentation` | none | `None` |
//! | `required_features` | none | empty |
//! | `apply` | mutates the context only | no-op |
//!
//! Features are stateless and shared between requests, hence `Send + Sync`.
//! They never touch the filesystem or network; everything goes through the
//! context.
//!
//! ## Default features
//!
//! A [`DefaultFeature`] is pulled in without being selected whenever its
//! `should_apply` predicate holds for the request.
//!
//! ## Built-in features
//!
//! | Name | Category | Notes |
//! |------|----------|-------|
//! | `dekorate-*` | Cloud | preview, `default` and `grpc` only |
//! | `micrometer` | Metrics | hidden, required by exporters |
//! | `micrometer-dynatrace` | Metrics | Dynatrace exporter |
//! | `management` | Management | management endpoints |
//! | `shade` | Packaging | default feature |
//!
//! [`GebFeature`] is not built in. Register it explicitly to exercise
//! test-framework dependent dependencies.

mod dekorate;
mod geb;
mod micrometer;
mod other;
mod registry;
mod resolver;

use std::sync::Arc;

use crate::domain::{ApplicationType, Category, DocumentationLink, Options};
use crate::generator::GeneratorContext;

pub use dekorate::{Dekorate, DekorateFlavor, DEKORATE_DOCUMENTATION};
pub use geb::GebFeature;
pub use micrometer::{Dynatrace, MicrometerCore, EXPORT_PREFIX};
pub use other::{Management, ShadePlugin};
pub use registry::{FeatureRegistry, RegistryError};
pub use resolver::{FeatureResolver, SelectionError};

/// Shared handle to a registered feature
pub type FeatureRef = Arc<dyn Feature>;

/// A selectable unit of functionality for a generated project
pub trait Feature: Send + Sync {
    /// Unique identifier
    fn name(&self) -> &str;

    /// Human-readable title, defaults to the name
    fn title(&self) -> &str {
        self.name()
    }

    fn description(&self) -> &str {
        ""
    }

    fn category(&self) -> Category;

    /// Whether the feature can be used with this kind of application
    fn supports(&self, application_type: ApplicationType) -> bool;

    fn is_preview(&self) -> bool {
        false
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn micronaut_documentation(&self) -> Option<&str> {
        None
    }

    fn third_party_documentation(&self) -> Option<&str> {
        None
    }

    /// Documentation links built from the documentation URLs
    fn documentation_links(&self) -> Vec<DocumentationLink> {
        let mut links = Vec::new();
        if let Some(url) = self.micronaut_documentation() {
            links.push(DocumentationLink::new("Micronaut Documentation", url));
        }
        if let Some(url) = self.third_party_documentation() {
            links.push(DocumentationLink::new(
                format!("{} Documentation", self.title()),
                url,
            ));
        }
        links
    }

    /// Names of features that must be applied along with this one
    fn required_features(&self) -> &[&str] {
        &[]
    }

    /// Contributes dependencies and configuration to the context
    fn apply(&self, _context: &mut GeneratorContext) {}

    /// Returns the default-feature view if this feature auto-applies
    fn as_default_feature(&self) -> Option<&dyn DefaultFeature> {
        None
    }
}

/// A feature that is included automatically when its predicate holds
pub trait DefaultFeature: Feature {
    /// Evaluated once per request, against the features selected so far
    fn should_apply(
        &self,
        application_type: ApplicationType,
        options: &Options,
        selected_features: &[FeatureRef],
    ) -> bool;
}
