//! Configuration handling for the starter CLI
//!
//! Configuration is read from `~/.config/starter/config.toml` (platform
//! equivalent) or from an explicit `--config` path. Missing files fall back
//! to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::{ApplicationType, BuildTool, Language, Options, TestFramework, DEFAULT_JAVA_VERSION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Oldest JDK generated projects can target
const MIN_JAVA_VERSION: u32 = 8;

/// Defaults applied to `starter create` when flags are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub application_type: ApplicationType,

    pub language: Language,

    pub build_tool: BuildTool,

    /// Falls back to the language's default when unset
    pub test_framework: Option<TestFramework>,

    pub java_version: u32,

    /// Features selected for every project
    pub features: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            application_type: ApplicationType::Default,
            language: Language::Java,
            build_tool: BuildTool::Gradle,
            test_framework: None,
            java_version: DEFAULT_JAVA_VERSION,
            features: vec![],
        }
    }
}

/// User configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (text, json or yaml)
    pub default_format: OutputFormat,

    pub defaults: Defaults,
}

impl Config {
    /// Loads configuration from an explicit path, or the global location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::global_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "starter", "starter")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads and validates a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.java_version < MIN_JAVA_VERSION {
            return Err(ConfigError::Invalid(format!(
                "defaults.java_version must be at least {}, got {}",
                MIN_JAVA_VERSION, self.defaults.java_version
            )));
        }
        if self.defaults.features.iter().any(|f| f.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "defaults.features must not contain empty names".to_string(),
            ));
        }
        Ok(())
    }

    /// Options from the configured defaults
    pub fn options(&self) -> Options {
        Options::new(
            self.defaults.language,
            self.defaults.test_framework,
            self.defaults.build_tool,
            self.defaults.java_version,
        )
    }

    /// Serializes the configuration back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.defaults.application_type, ApplicationType::Default);
        assert_eq!(config.options(), Options::default());
    }

    #[test]
    fn parse_config() {
        let toml = r#"
default_format = "json"

[defaults]
application_type = "grpc"
language = "groovy"
build_tool = "maven"
java_version = 17
features = ["geb"]
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.defaults.application_type, ApplicationType::Grpc);
        assert_eq!(config.defaults.features, vec!["geb"]);

        let options = config.options();
        assert_eq!(options.language, Language::Groovy);
        assert_eq!(options.test_framework, TestFramework::Spock);
        assert_eq!(options.build_tool, BuildTool::Maven);
        assert_eq!(options.java_version, 17);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::parse("[defaults]\ntest_framework = \"kotest\"\n").unwrap();

        assert_eq!(config.defaults.java_version, DEFAULT_JAVA_VERSION);
        assert_eq!(config.options().test_framework, TestFramework::Kotest);
    }

    #[test]
    fn rejects_old_java_version() {
        let err = Config::parse("[defaults]\njava_version = 6\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_application_type() {
        let err = Config::parse("[defaults]\napplication_type = \"desktop\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_format = \"yaml\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_format, OutputFormat::Yaml);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.defaults.features = vec!["shade".to_string()];

        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
