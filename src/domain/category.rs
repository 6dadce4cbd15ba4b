//! Feature categories used for grouping in listings

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cloud,
    DevTools,
    Management,
    Metrics,
    Packaging,
}

impl Category {
    /// Display tag shown in feature listings
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cloud => "Cloud",
            Category::DevTools => "Dev Tools",
            Category::Management => "Management",
            Category::Metrics => "Metrics",
            Category::Packaging => "Packaging",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
