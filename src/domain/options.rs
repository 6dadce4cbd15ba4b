//! Generation options
//!
//! Language, build tool, test framework and JDK version chosen for a
//! generated project.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::application_type::ParseError;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Java,
    Groovy,
    Kotlin,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Groovy => "groovy",
            Language::Kotlin => "kotlin",
        }
    }

    /// Test framework used when none was chosen explicitly
    pub fn default_test_framework(&self) -> TestFramework {
        match self {
            Language::Java | Language::Kotlin => TestFramework::Junit,
            Language::Groovy => TestFramework::Spock,
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "groovy" => Ok(Language::Groovy),
            "kotlin" => Ok(Language::Kotlin),
            _ => Err(ParseError::Language(s.to_string())),
        }
    }
}

/// Build tool of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuildTool {
    #[default]
    Gradle,
    GradleKotlin,
    Maven,
}

impl BuildTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTool::Gradle => "gradle",
            BuildTool::GradleKotlin => "gradle_kotlin",
            BuildTool::Maven => "maven",
        }
    }
}

impl FromStr for BuildTool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradle" => Ok(BuildTool::Gradle),
            "gradle_kotlin" | "gradle-kotlin" => Ok(BuildTool::GradleKotlin),
            "maven" => Ok(BuildTool::Maven),
            _ => Err(ParseError::BuildTool(s.to_string())),
        }
    }
}

/// Test framework of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestFramework {
    Junit,
    Spock,
    Kotest,
}

impl TestFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestFramework::Junit => "junit",
            TestFramework::Spock => "spock",
            TestFramework::Kotest => "kotest",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestFramework {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junit" => Ok(TestFramework::Junit),
            "spock" => Ok(TestFramework::Spock),
            "kotest" => Ok(TestFramework::Kotest),
            _ => Err(ParseError::TestFramework(s.to_string())),
        }
    }
}

/// Default JDK version targeted by generated projects
pub const DEFAULT_JAVA_VERSION: u32 = 11;

/// Options for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub language: Language,
    pub test_framework: TestFramework,
    pub build_tool: BuildTool,
    pub java_version: u32,
}

impl Options {
    /// Creates options, picking the language's default test framework if
    /// none is given
    pub fn new(
        language: Language,
        test_framework: Option<TestFramework>,
        build_tool: BuildTool,
        java_version: u32,
    ) -> Self {
        Self {
            language,
            test_framework: test_framework.unwrap_or_else(|| language.default_test_framework()),
            build_tool,
            java_version,
        }
    }

    pub fn with_test_framework(mut self, test_framework: TestFramework) -> Self {
        self.test_framework = test_framework;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new(
            Language::default(),
            None,
            BuildTool::default(),
            DEFAULT_JAVA_VERSION,
        )
    }
}
