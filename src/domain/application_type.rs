//! Application types
//!
//! The shape of the generated project. Features use it to decide whether
//! they can be offered at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown application type: '{0}' (expected one of: default, cli, function, grpc, messaging)")]
    ApplicationType(String),

    #[error("Unknown language: '{0}' (expected one of: java, groovy, kotlin)")]
    Language(String),

    #[error("Unknown build tool: '{0}' (expected one of: gradle, gradle_kotlin, maven)")]
    BuildTool(String),

    #[error("Unknown test framework: '{0}' (expected one of: junit, spock, kotest)")]
    TestFramework(String),
}

/// Kind of project being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    /// HTTP service
    #[default]
    Default,
    /// Command line application
    Cli,
    /// Serverless function
    Function,
    /// gRPC service
    Grpc,
    /// Messaging-driven service
    Messaging,
}

impl ApplicationType {
    /// All application types, in listing order
    pub const ALL: [ApplicationType; 5] = [
        ApplicationType::Default,
        ApplicationType::Cli,
        ApplicationType::Function,
        ApplicationType::Grpc,
        ApplicationType::Messaging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Default => "default",
            ApplicationType::Cli => "cli",
            ApplicationType::Function => "function",
            ApplicationType::Grpc => "grpc",
            ApplicationType::Messaging => "messaging",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::ApplicationType(s.to_string()))
    }
}
