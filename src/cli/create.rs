//! Project generation command

use anyhow::{Context, Result};

use super::output::Output;
use crate::config::Config;
use crate::domain::{ApplicationType, BuildTool, Language, Options, Scope, TestFramework};
use crate::feature::FeatureRegistry;
use crate::generator::{GenerationRequest, Generator, GeneratorContext};

/// Arguments of `starter create`; unset values come from the config
pub struct CreateArgs {
    pub name: String,
    pub application_type: Option<ApplicationType>,
    pub features: Vec<String>,
    pub lang: Option<Language>,
    pub build: Option<BuildTool>,
    pub test: Option<TestFramework>,
    pub java_version: Option<u32>,
}

impl CreateArgs {
    /// Merges arguments over configured defaults
    fn into_request(self, config: &Config) -> Result<GenerationRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            anyhow::bail!("Project name must not be empty");
        }

        let defaults = &config.defaults;
        let language = self.lang.unwrap_or(defaults.language);
        let test_framework = self.test.or(if self.lang.is_some() {
            None
        } else {
            defaults.test_framework
        });
        let options = Options::new(
            language,
            test_framework,
            self.build.unwrap_or(defaults.build_tool),
            self.java_version.unwrap_or(defaults.java_version),
        );

        let mut features = defaults.features.clone();
        for feature in self.features {
            let feature = feature.trim().to_string();
            if !feature.is_empty() && !features.contains(&feature) {
                features.push(feature);
            }
        }

        Ok(GenerationRequest::new(
            name,
            self.application_type.unwrap_or(defaults.application_type),
        )
        .with_options(options)
        .with_features(features))
    }
}

pub fn run(output: &Output, registry: &FeatureRegistry, config: &Config, args: CreateArgs) -> Result<()> {
    let request = args.into_request(config)?;
    output.verbose_ctx(
        "create",
        &format!(
            "Request: name={}, type={}, features={:?}",
            request.name, request.application_type, request.features
        ),
    );

    let generator = Generator::new(registry);
    let features = generator
        .resolve(&request)
        .with_context(|| format!("Cannot generate '{}'", request.name))?;

    for feature in &features {
        output.verbose_ctx("create", &format!("Applying feature: {}", feature.name()));
    }

    let context = generator.apply(&request, &features);
    output.verbose_ctx(
        "create",
        &format!(
            "Generated {} configuration entries and {} dependencies",
            context.configuration().len(),
            context.dependencies().len()
        ),
    );

    if output.is_text() {
        print_context(output, &context);
    } else {
        output.data(&context);
    }

    Ok(())
}

fn print_context(output: &Output, context: &GeneratorContext) {
    let options = context.options();
    println!(
        "Project: {} ({}, {}, {}, {}, java {})",
        context.project_name(),
        context.application_type(),
        options.language.as_str(),
        options.build_tool.as_str(),
        options.test_framework,
        options.java_version
    );
    println!("Features: {}", context.features().join(", "));

    if !context.configuration().is_empty() {
        output.blank();
        println!("Configuration:");
        for (key, value) in context.configuration() {
            println!("  {} = {}", key, value);
        }
    }

    if !context.dependencies().is_empty() {
        output.blank();
        println!("Dependencies:");
        for scope in Scope::ALL {
            for dependency in context.dependencies_in(scope) {
                println!("  {:<20} {}", scope.as_str(), dependency.coordinate());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            application_type: None,
            features: vec![],
            lang: None,
            build: None,
            test: None,
            java_version: None,
        }
    }

    #[test]
    fn request_uses_config_defaults() {
        let mut config = Config::default();
        config.defaults.application_type = ApplicationType::Grpc;
        config.defaults.features = vec!["geb".to_string()];

        let request = args("demo").into_request(&config).unwrap();

        assert_eq!(request.application_type, ApplicationType::Grpc);
        assert_eq!(request.features, vec!["geb"]);
        assert_eq!(request.options, Options::default());
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.defaults.test_framework = Some(TestFramework::Kotest);

        let mut create = args("demo");
        create.test = Some(TestFramework::Spock);
        create.features = vec!["geb".to_string(), " ".to_string(), "geb".to_string()];

        let request = create.into_request(&config).unwrap();
        assert_eq!(request.options.test_framework, TestFramework::Spock);
        assert_eq!(request.features, vec!["geb"]);
    }

    #[test]
    fn language_flag_resets_configured_test_framework() {
        let mut config = Config::default();
        config.defaults.test_framework = Some(TestFramework::Junit);

        let mut create = args("demo");
        create.lang = Some(Language::Groovy);

        let request = create.into_request(&config).unwrap();
        assert_eq!(request.options.test_framework, TestFramework::Spock);
    }

    #[test]
    fn empty_name_rejected() {
        assert!(args("  ").into_request(&Config::default()).is_err());
    }
}
