//! Micrometer metrics features
//!
//! Every exporter requires the `micrometer` core feature and the
//! `management` feature, and writes its settings under [`EXPORT_PREFIX`].

use crate::domain::{ApplicationType, Category, Dependency};
use crate::generator::GeneratorContext;

use super::Feature;

/// Configuration prefix shared by all metric exporters
pub const EXPORT_PREFIX: &str = "micronaut.metrics.export";

const MICROMETER_GROUP: &str = "io.micronaut.micrometer";

const MICROMETER_DOCUMENTATION: &str =
    "https://micronaut-projects.github.io/micronaut-micrometer/latest/guide/index.html";

const EXPORTER_REQUIREMENTS: &[&str] = &["micrometer", "management"];

/// Application types metrics can be collected for
fn supports_metrics(application_type: ApplicationType) -> bool {
    matches!(
        application_type,
        ApplicationType::Default | ApplicationType::Grpc | ApplicationType::Messaging
    )
}

/// Core Micrometer integration, pulled in by the exporters
pub struct MicrometerCore;

impl Feature for MicrometerCore {
    fn name(&self) -> &str {
        "micrometer"
    }

    fn title(&self) -> &str {
        "Micrometer"
    }

    fn description(&self) -> &str {
        "Adds support for Micrometer metrics"
    }

    fn category(&self) -> Category {
        Category::Metrics
    }

    fn supports(&self, application_type: ApplicationType) -> bool {
        supports_metrics(application_type)
    }

    fn is_visible(&self) -> bool {
        false
    }

    fn micronaut_documentation(&self) -> Option<&str> {
        Some(MICROMETER_DOCUMENTATION)
    }

    fn apply(&self, context: &mut GeneratorContext) {
        context.put_configuration("micronaut.metrics.enabled", true);
        context.add_dependency(
            Dependency::builder()
                .group_id(MICROMETER_GROUP)
                .artifact_id("micronaut-micrometer-core")
                .compile(),
        );
    }
}

/// Micrometer registry reporting to Dynatrace
pub struct Dynatrace;

impl Feature for Dynatrace {
    fn name(&self) -> &str {
        "micrometer-dynatrace"
    }

    fn title(&self) -> &str {
        "Micrometer Dynatrace"
    }

    fn description(&self) -> &str {
        "Adds support for Micrometer metrics (w/ Dynatrace reporter)"
    }

    fn category(&self) -> Category {
        Category::Metrics
    }

    fn supports(&self, application_type: ApplicationType) -> bool {
        supports_metrics(application_type)
    }

    fn micronaut_documentation(&self) -> Option<&str> {
        Some(MICROMETER_DOCUMENTATION)
    }

    fn third_party_documentation(&self) -> Option<&str> {
        Some("https://micrometer.io/docs/registry/dynatrace")
    }

    fn required_features(&self) -> &[&str] {
        EXPORTER_REQUIREMENTS
    }

    fn apply(&self, context: &mut GeneratorContext) {
        let prefix = format!("{}.dynatrace", EXPORT_PREFIX);

        context.put_configuration(format!("{}.enabled", prefix), true);
        context.put_configuration(format!("{}.apiToken", prefix), "${DYNATRACE_DEVICE_API_TOKEN}");
        context.put_configuration(format!("{}.uri", prefix), "${DYNATRACE_DEVICE_URI}");
        context.put_configuration(format!("{}.deviceId", prefix), "${DYNATRACE_DEVICE_ID}");
        context.put_configuration(format!("{}.step", prefix), "PT1M");
        context.add_dependency(
            Dependency::builder()
                .group_id(MICROMETER_GROUP)
                .artifact_id("micronaut-micrometer-registry-dynatrace")
                .compile(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Options, Scope};
    use crate::generator::ConfigValue;

    fn context() -> GeneratorContext {
        GeneratorContext::new("demo", ApplicationType::Default, Options::default())
    }

    #[test]
    fn dynatrace_configuration() {
        let mut ctx = context();
        Dynatrace.apply(&mut ctx);

        let config = ctx.configuration();
        assert_eq!(config.len(), 5);
        assert_eq!(
            config.get("micronaut.metrics.export.dynatrace.enabled"),
            Some(&ConfigValue::Bool(true))
        );
        assert_eq!(
            config.get("micronaut.metrics.export.dynatrace.apiToken"),
            Some(&ConfigValue::from("${DYNATRACE_DEVICE_API_TOKEN}"))
        );
        assert_eq!(
            config.get("micronaut.metrics.export.dynatrace.uri"),
            Some(&ConfigValue::from("${DYNATRACE_DEVICE_URI}"))
        );
        assert_eq!(
            config.get("micronaut.metrics.export.dynatrace.deviceId"),
            Some(&ConfigValue::from("${DYNATRACE_DEVICE_ID}"))
        );
        assert_eq!(
            config.get("micronaut.metrics.export.dynatrace.step"),
            Some(&ConfigValue::from("PT1M"))
        );
    }

    #[test]
    fn dynatrace_dependency() {
        let mut ctx = context();
        Dynatrace.apply(&mut ctx);

        let deps = ctx.dependencies();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].group_id.as_deref(), Some("io.micronaut.micrometer"));
        assert_eq!(deps[0].artifact_id, "micronaut-micrometer-registry-dynatrace");
        assert_eq!(deps[0].scope, Scope::Compile);
    }

    #[test]
    fn dynatrace_applied_twice_is_stable() {
        let mut ctx = context();
        Dynatrace.apply(&mut ctx);
        Dynatrace.apply(&mut ctx);

        assert_eq!(ctx.dependencies().len(), 1);
        assert_eq!(ctx.configuration().len(), 5);
    }

    #[test]
    fn exporters_require_core_and_management() {
        assert_eq!(Dynatrace.required_features(), &["micrometer", "management"]);
        assert!(!MicrometerCore.is_visible());
    }

    #[test]
    fn metrics_support_matrix() {
        assert!(Dynatrace.supports(ApplicationType::Default));
        assert!(Dynatrace.supports(ApplicationType::Grpc));
        assert!(Dynatrace.supports(ApplicationType::Messaging));
        assert!(!Dynatrace.supports(ApplicationType::Cli));
        assert!(!Dynatrace.supports(ApplicationType::Function));
    }

    #[test]
    fn dynatrace_documentation_links() {
        let links = Dynatrace.documentation_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url(), MICROMETER_DOCUMENTATION);
        assert_eq!(links[1].title(), "Micrometer Dynatrace Documentation");
    }
}
