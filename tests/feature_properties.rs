//! Property tests for the feature contract and generation context

use proptest::prelude::*;

use starter::domain::{ApplicationType, BuildTool, Language, Options, Scope, TestFramework};
use starter::feature::{FeatureRegistry, GebFeature};
use starter::generator::{ConfigValue, GenerationRequest, Generator, GeneratorContext};

fn application_type() -> impl Strategy<Value = ApplicationType> {
    prop::sample::select(ApplicationType::ALL.to_vec())
}

fn test_framework() -> impl Strategy<Value = TestFramework> {
    prop::sample::select(vec![TestFramework::Junit, TestFramework::Spock, TestFramework::Kotest])
}

fn feature_names() -> Vec<String> {
    FeatureRegistry::builtin()
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

proptest! {
    #[test]
    fn supports_is_deterministic_and_pure(ty in application_type()) {
        let registry = FeatureRegistry::builtin();
        let mut queried = GeneratorContext::new("demo", ty, Options::default());
        let mut plain = GeneratorContext::new("demo", ty, Options::default());

        for feature in registry.iter() {
            let first = feature.supports(ty);
            let second = feature.supports(ty);
            prop_assert_eq!(first, second);
            if first {
                feature.apply(&mut queried);
            }
        }
        for feature in registry.supporting(ty) {
            feature.apply(&mut plain);
        }

        prop_assert_eq!(queried.dependencies(), plain.dependencies());
        prop_assert_eq!(queried.configuration(), plain.configuration());
    }

    #[test]
    fn applying_twice_adds_no_duplicates(
        ty in application_type(),
        tf in test_framework(),
    ) {
        let registry = FeatureRegistry::builtin();
        let options = Options::new(Language::Java, Some(tf), BuildTool::Gradle, 17);

        for feature in registry.supporting(ty) {
            let mut once = GeneratorContext::new("demo", ty, options.clone());
            feature.apply(&mut once);

            let mut twice = GeneratorContext::new("demo", ty, options.clone());
            feature.apply(&mut twice);
            feature.apply(&mut twice);

            prop_assert_eq!(once.dependencies(), twice.dependencies());
            prop_assert_eq!(once.configuration(), twice.configuration());
        }
    }

    #[test]
    fn configuration_last_write_wins(
        key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}",
        values in prop::collection::vec(any::<i64>(), 1..8),
    ) {
        let mut ctx = GeneratorContext::new("demo", ApplicationType::Default, Options::default());
        for value in &values {
            ctx.put_configuration(key.clone(), *value);
        }

        prop_assert_eq!(ctx.configuration().len(), 1);
        let expected = values.last().map(|v| ConfigValue::Integer(*v));
        prop_assert_eq!(ctx.get_configuration(&key), expected.as_ref());
    }

    #[test]
    fn generated_features_are_supported_and_unique(
        ty in application_type(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let registry = FeatureRegistry::builtin();
        let supported: Vec<String> = registry
            .supporting(ty)
            .map(|f| f.name().to_string())
            .collect();
        let selected: Vec<String> = picks.iter().map(|i| i.get(&supported).clone()).collect();

        let request = GenerationRequest::new("demo", ty).with_features(selected.clone());
        let ctx = Generator::new(&registry).generate(&request).unwrap();

        let mut applied = ctx.features().to_vec();
        for name in &selected {
            prop_assert!(applied.contains(name));
        }
        for name in &applied {
            prop_assert!(registry.get(name).unwrap().supports(ty));
        }
        prop_assert!(applied.contains(&"shade".to_string()));

        let total = applied.len();
        applied.sort();
        applied.dedup();
        prop_assert_eq!(applied.len(), total);
    }

    #[test]
    fn geb_picks_one_test_artifact(tf in test_framework()) {
        let mut registry = FeatureRegistry::builtin();
        registry.register(GebFeature).unwrap();
        let options = Options::default().with_test_framework(tf);
        let request = GenerationRequest::new("demo", ApplicationType::Default)
            .with_options(options)
            .with_features(["geb"]);
        let ctx = Generator::new(&registry).generate(&request).unwrap();

        let test: Vec<_> = ctx.dependencies_in(Scope::TestCompile).map(|d| d.artifact_id.as_str()).collect();
        let expected: Vec<&str> = match tf {
            TestFramework::Junit => vec!["geb-junit5"],
            TestFramework::Spock => vec!["geb-spock"],
            TestFramework::Kotest => vec![],
        };
        prop_assert_eq!(test, expected);
        prop_assert_eq!(ctx.dependencies_in(Scope::TestRuntime).count(), 2);
    }
}

#[test]
fn builtin_names_are_unique_and_non_empty() {
    let mut names = feature_names();
    assert!(names.iter().all(|n| !n.trim().is_empty()));

    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}
