//! Geb browser automation for functional tests
//!
//! Not part of the built-in registry; callers register it when they need a
//! feature whose dependencies follow the selected test framework. The Geb
//! test artifact depends on that framework and the Selenium runtime
//! dependencies are always added.

use crate::domain::{ApplicationType, Category, TestFramework};
use crate::generator::GeneratorContext;

use super::Feature;

const SELENIUM_RUNTIME: [&str; 2] = ["selenium-firefox-driver", "selenium-support"];

/// Geb integration artifact for a test framework
///
/// Geb ships no Kotest integration, so Kotest maps to `None` and only the
/// Selenium runtime is added.
fn geb_artifact(test_framework: TestFramework) -> Option<&'static str> {
    match test_framework {
        TestFramework::Junit => Some("geb-junit5"),
        TestFramework::Spock => Some("geb-spock"),
        TestFramework::Kotest => None,
    }
}

pub struct GebFeature;

impl Feature for GebFeature {
    fn name(&self) -> &str {
        "geb"
    }

    fn title(&self) -> &str {
        "Geb"
    }

    fn description(&self) -> &str {
        "Adds Geb browser automation for functional tests"
    }

    fn category(&self) -> Category {
        Category::DevTools
    }

    fn supports(&self, _application_type: ApplicationType) -> bool {
        true
    }

    fn apply(&self, context: &mut GeneratorContext) {
        if let Some(artifact) = geb_artifact(context.test_framework()) {
            context.add_test_dependency(artifact);
        }
        for artifact in SELENIUM_RUNTIME {
            context.add_test_runtime_dependency(artifact);
        }
    }
}
