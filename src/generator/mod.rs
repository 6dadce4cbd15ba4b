//! # Generation
//!
//! Drives one generation request:
//!
//! ```text
//! GenerationRequest ──resolve──▶ [Feature] ──apply each──▶ GeneratorContext
//! ```
//!
//! The finished [`GeneratorContext`] is the hand-off to build and
//! configuration file rendering, which lives outside this crate.
//!
//! ## Ordering
//!
//! Features are applied once each, required features first and otherwise in
//! registry declaration order. When two features write the same
//! configuration key, the one applied later wins.

mod context;

pub use context::{ConfigValue, GeneratorContext};

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationType, Options};
use crate::feature::{FeatureRef, FeatureRegistry, FeatureResolver, SelectionError};

/// What the user asked to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Project name
    pub name: String,

    pub application_type: ApplicationType,

    pub options: Options,

    /// Explicitly selected feature names
    pub features: Vec<String>,
}

impl GenerationRequest {
    pub fn new(name: impl Into<String>, application_type: ApplicationType) -> Self {
        Self {
            name: name.into(),
            application_type,
            options: Options::default(),
            features: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Runs generation requests against a registry
pub struct Generator<'a> {
    registry: &'a FeatureRegistry,
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a FeatureRegistry) -> Self {
        Self { registry }
    }

    /// Features the request would apply, in application order
    pub fn resolve(&self, request: &GenerationRequest) -> Result<Vec<FeatureRef>, SelectionError> {
        FeatureResolver::new(self.registry).resolve(
            request.application_type,
            &request.options,
            request.features.as_slice(),
        )
    }

    /// Applies already resolved features to a fresh context
    pub fn apply(&self, request: &GenerationRequest, features: &[FeatureRef]) -> GeneratorContext {
        let mut context = GeneratorContext::new(
            request.name.clone(),
            request.application_type,
            request.options.clone(),
        );

        for feature in features {
            feature.apply(&mut context);
            context.record_feature(feature.name());
        }

        context
    }

    /// Resolves and applies a request
    pub fn generate(&self, request: &GenerationRequest) -> Result<GeneratorContext, SelectionError> {
        let features = self.resolve(request)?;
        Ok(self.apply(request, &features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Scope, TestFramework};
    use crate::feature::Feature;

    #[test]
    fn generate_dynatrace_project() {
        let registry = FeatureRegistry::builtin();
        let request = GenerationRequest::new("metrics", ApplicationType::Default)
            .with_features(["micrometer-dynatrace"]);

        let ctx = Generator::new(&registry).generate(&request).unwrap();

        assert_eq!(
            ctx.features(),
            &["micrometer", "management", "micrometer-dynatrace", "shade"]
        );
        assert_eq!(ctx.dependencies_in(Scope::Compile).count(), 3);
        assert_eq!(ctx.configuration().len(), 6);
        assert_eq!(ctx.project_name(), "metrics");
    }

    #[test]
    fn generate_uses_request_test_framework() {
        let mut registry = FeatureRegistry::builtin();
        registry.register(crate::feature::GebFeature).unwrap();
        let request = GenerationRequest::new("browser", ApplicationType::Cli)
            .with_options(Options::default().with_test_framework(TestFramework::Spock))
            .with_features(["geb"]);

        let ctx = Generator::new(&registry).generate(&request).unwrap();

        assert!(ctx.has_dependency("geb-spock"));
        assert!(!ctx.has_dependency("geb-junit5"));
    }

    #[test]
    fn generate_rejects_unsupported_selection() {
        let registry = FeatureRegistry::builtin();
        let request = GenerationRequest::new("fn", ApplicationType::Function)
            .with_features(["micrometer-dynatrace"]);

        let err = Generator::new(&registry).generate(&request).err();
        assert!(matches!(err, Some(SelectionError::NotSupported { .. })));
    }

    struct Port(i64);

    impl Feature for Port {
        fn name(&self) -> &str {
            if self.0 == 8080 {
                "port-a"
            } else {
                "port-b"
            }
        }

        fn category(&self) -> Category {
            Category::DevTools
        }

        fn supports(&self, _application_type: ApplicationType) -> bool {
            true
        }

        fn apply(&self, context: &mut GeneratorContext) {
            context.put_configuration("micronaut.server.port", self.0);
        }
    }

    #[test]
    fn later_feature_wins_on_shared_key() {
        let mut registry = FeatureRegistry::new();
        registry.register(Port(8080)).unwrap();
        registry.register(Port(9090)).unwrap();

        let request = GenerationRequest::new("ports", ApplicationType::Default)
            .with_features(["port-b", "port-a"]);
        let ctx = Generator::new(&registry).generate(&request).unwrap();

        assert_eq!(ctx.features(), &["port-a", "port-b"]);
        assert_eq!(
            ctx.get_configuration("micronaut.server.port"),
            Some(&ConfigValue::Integer(9090))
        );
    }
}
