//! Starter - feature plugins for a project generator
//!
//! Each [`Feature`] declares metadata (name, category, supported
//! application types) and, when selected, contributes build dependencies
//! and configuration to a request-scoped [`GeneratorContext`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod feature;
pub mod generator;

pub use domain::{ApplicationType, Dependency, DocumentationLink, Options, Scope, TestFramework};
pub use feature::{DefaultFeature, Feature, FeatureRegistry};
pub use generator::{GenerationRequest, Generator, GeneratorContext};
