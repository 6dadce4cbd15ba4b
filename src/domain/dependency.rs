//! Build dependency declarations
//!
//! A dependency is a build coordinate plus the scope it is declared in.
//! Versions are not tracked here; the build renderer resolves them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope a dependency is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Main compile classpath
    Compile,
    /// Annotation processor path
    AnnotationProcessor,
    /// Test compile classpath
    TestCompile,
    /// Test runtime classpath only
    TestRuntime,
}

impl Scope {
    /// All scopes, in build-file order
    pub const ALL: [Scope; 4] = [
        Scope::Compile,
        Scope::AnnotationProcessor,
        Scope::TestCompile,
        Scope::TestRuntime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::AnnotationProcessor => "annotationProcessor",
            Scope::TestCompile => "testCompile",
            Scope::TestRuntime => "testRuntime",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A build coordinate in a given scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Group of the artifact; `None` for dependencies looked up by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    pub artifact_id: String,

    pub scope: Scope,
}

impl Dependency {
    /// Starts building a dependency
    pub fn builder() -> DependencyBuilder {
        DependencyBuilder::default()
    }

    /// Creates a dependency identified only by its artifact name
    pub fn named(artifact_id: impl Into<String>, scope: Scope) -> Self {
        Self {
            group_id: None,
            artifact_id: artifact_id.into(),
            scope,
        }
    }

    /// Returns `group:artifact`, or just the artifact when there is no group
    pub fn coordinate(&self) -> String {
        match &self.group_id {
            Some(group) => format!("{}:{}", group, self.artifact_id),
            None => self.artifact_id.clone(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinate(), self.scope)
    }
}

/// Builder for [`Dependency`]; the scope method finishes the build
#[derive(Debug, Clone, Default)]
pub struct DependencyBuilder {
    group_id: Option<String>,
    artifact_id: String,
}

impl DependencyBuilder {
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = artifact_id.into();
        self
    }

    pub fn scope(self, scope: Scope) -> Dependency {
        Dependency {
            group_id: self.group_id,
            artifact_id: self.artifact_id,
            scope,
        }
    }

    pub fn compile(self) -> Dependency {
        self.scope(Scope::Compile)
    }

    pub fn annotation_processor(self) -> Dependency {
        self.scope(Scope::AnnotationProcessor)
    }

    pub fn test_compile(self) -> Dependency {
        self.scope(Scope::TestCompile)
    }

    pub fn test_runtime(self) -> Dependency {
        self.scope(Scope::TestRuntime)
    }
}
