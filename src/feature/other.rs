//! Packaging and management features

use crate::domain::{ApplicationType, Category, Dependency, Options};
use crate::generator::GeneratorContext;

use super::{DefaultFeature, Feature, FeatureRef};

/// Builds a fat/shaded JAR
///
/// Contributes nothing to the context; the build renderer adds the plugin
/// when the feature is present.
pub struct ShadePlugin;

impl Feature for ShadePlugin {
    fn name(&self) -> &str {
        "shade"
    }

    fn title(&self) -> &str {
        "Fat/Shaded JAR Support"
    }

    fn description(&self) -> &str {
        "Adds the ability to build a Fat/Shaded JAR"
    }

    fn category(&self) -> Category {
        Category::Packaging
    }

    fn supports(&self, _application_type: ApplicationType) -> bool {
        true
    }

    fn as_default_feature(&self) -> Option<&dyn DefaultFeature> {
        Some(self)
    }
}

impl DefaultFeature for ShadePlugin {
    fn should_apply(
        &self,
        _application_type: ApplicationType,
        _options: &Options,
        _selected_features: &[FeatureRef],
    ) -> bool {
        // TODO: skip once a jib container feature exists and is selected
        true
    }
}

/// Management and monitoring endpoints
pub struct Management;

impl Feature for Management {
    fn name(&self) -> &str {
        "management"
    }

    fn title(&self) -> &str {
        "Micronaut Management"
    }

    fn description(&self) -> &str {
        "Adds support for management and monitoring endpoints"
    }

    fn category(&self) -> Category {
        Category::Management
    }

    fn supports(&self, application_type: ApplicationType) -> bool {
        matches!(
            application_type,
            ApplicationType::Default | ApplicationType::Grpc | ApplicationType::Messaging
        )
    }

    fn micronaut_documentation(&self) -> Option<&str> {
        Some("https://docs.micronaut.io/latest/guide/index.html#management")
    }

    fn apply(&self, context: &mut GeneratorContext) {
        context.add_dependency(
            Dependency::builder()
                .group_id("io.micronaut")
                .artifact_id("micronaut-management")
                .compile(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TestFramework;

    #[test]
    fn shade_always_applies() {
        let options = Options::default();
        for ty in ApplicationType::ALL {
            assert!(ShadePlugin.supports(ty));
            assert!(ShadePlugin.should_apply(ty, &options, &[]));
        }

        let spock = Options::default().with_test_framework(TestFramework::Spock);
        assert!(ShadePlugin.should_apply(ApplicationType::Cli, &spock, &[]));
    }

    #[test]
    fn shade_is_a_default_feature() {
        assert!(ShadePlugin.as_default_feature().is_some());
        assert!(Management.as_default_feature().is_none());
        assert_eq!(ShadePlugin.category(), Category::Packaging);
        assert!(ShadePlugin.is_visible());
    }

    #[test]
    fn shade_contributes_nothing() {
        let mut ctx = GeneratorContext::new("demo", ApplicationType::Default, Options::default());
        ShadePlugin.apply(&mut ctx);

        assert!(ctx.dependencies().is_empty());
        assert!(ctx.configuration().is_empty());
    }

    #[test]
    fn management_dependency() {
        let mut ctx = GeneratorContext::new("demo", ApplicationType::Grpc, Options::default());
        Management.apply(&mut ctx);

        assert_eq!(ctx.dependencies().len(), 1);
        assert_eq!(ctx.dependencies()[0].coordinate(), "io.micronaut:micronaut-management");
    }
}
