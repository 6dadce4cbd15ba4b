//! Domain values for project generation
//!
//! Plain data with no I/O: application types, options, dependencies,
//! categories and documentation links.

mod application_type;
mod category;
mod dependency;
mod documentation;
mod options;

pub use application_type::{ApplicationType, ParseError};
pub use category::Category;
pub use dependency::{Dependency, DependencyBuilder, Scope};
pub use documentation::DocumentationLink;
pub use options::{BuildTool, Language, Options, TestFramework, DEFAULT_JAVA_VERSION};
