//! Dekorate features
//!
//! Dekorate generates cloud deployment manifests from annotations at compile
//! time. All flavors share category, support and documentation; they differ
//! in the annotations artifact they add.

use crate::domain::{ApplicationType, Category, Dependency};
use crate::generator::GeneratorContext;

use super::Feature;

/// Micronaut guide covering the Dekorate integration
pub const DEKORATE_DOCUMENTATION: &str =
    "https://micronaut-projects.github.io/micronaut-kubernetes/latest/guide/index.html";

const DEKORATE_GROUP: &str = "io.dekorate";

/// Target platform of a Dekorate feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DekorateFlavor {
    Kubernetes,
    Openshift,
    Knative,
    Prometheus,
    Jaeger,
}

impl DekorateFlavor {
    pub const ALL: [DekorateFlavor; 5] = [
        DekorateFlavor::Kubernetes,
        DekorateFlavor::Openshift,
        DekorateFlavor::Knative,
        DekorateFlavor::Prometheus,
        DekorateFlavor::Jaeger,
    ];

    fn name(&self) -> &'static str {
        match self {
            DekorateFlavor::Kubernetes => "dekorate-kubernetes",
            DekorateFlavor::Openshift => "dekorate-openshift",
            DekorateFlavor::Knative => "dekorate-knative",
            DekorateFlavor::Prometheus => "dekorate-prometheus",
            DekorateFlavor::Jaeger => "dekorate-jaeger",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DekorateFlavor::Kubernetes => "Dekorate Kubernetes",
            DekorateFlavor::Openshift => "Dekorate OpenShift",
            DekorateFlavor::Knative => "Dekorate Knative",
            DekorateFlavor::Prometheus => "Dekorate Prometheus",
            DekorateFlavor::Jaeger => "Dekorate Jaeger",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            DekorateFlavor::Kubernetes => "Generates Kubernetes manifests at compile time",
            DekorateFlavor::Openshift => "Generates OpenShift manifests at compile time",
            DekorateFlavor::Knative => "Generates Knative manifests at compile time",
            DekorateFlavor::Prometheus => "Generates a Prometheus ServiceMonitor at compile time",
            DekorateFlavor::Jaeger => "Adds a Jaeger agent sidecar to the generated manifests",
        }
    }

    fn annotations_artifact(&self) -> &'static str {
        match self {
            DekorateFlavor::Kubernetes => "kubernetes-annotations",
            DekorateFlavor::Openshift => "openshift-annotations",
            DekorateFlavor::Knative => "knative-annotations",
            DekorateFlavor::Prometheus => "prometheus-annotations",
            DekorateFlavor::Jaeger => "jaeger-annotations",
        }
    }
}

/// A Dekorate feature for one platform
pub struct Dekorate {
    flavor: DekorateFlavor,
}

impl Dekorate {
    pub fn new(flavor: DekorateFlavor) -> Self {
        Self { flavor }
    }
}

impl Feature for Dekorate {
    fn name(&self) -> &str {
        self.flavor.name()
    }

    fn title(&self) -> &str {
        self.flavor.title()
    }

    fn description(&self) -> &str {
        self.flavor.description()
    }

    fn category(&self) -> Category {
        Category::Cloud
    }

    fn supports(&self, application_type: ApplicationType) -> bool {
        matches!(application_type, ApplicationType::Default | ApplicationType::Grpc)
    }

    fn is_preview(&self) -> bool {
        true
    }

    fn micronaut_documentation(&self) -> Option<&str> {
        Some(DEKORATE_DOCUMENTATION)
    }

    fn third_party_documentation(&self) -> Option<&str> {
        Some("https://dekorate.io/")
    }

    fn apply(&self, context: &mut GeneratorContext) {
        let annotations = Dependency::builder()
            .group_id(DEKORATE_GROUP)
            .artifact_id(self.flavor.annotations_artifact());

        context.add_dependency(annotations.clone().annotation_processor());
        context.add_dependency(annotations.compile());
    }
}
