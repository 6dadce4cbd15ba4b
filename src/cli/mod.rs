//! # Command-Line Interface
//!
//! Commands for inspecting features and previewing generation.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Features grouped by category, optionally filtered by `--type` |
//! | `show <feature>` | Metadata, support matrix and documentation links |
//! | `create <name>` | Run the generator and print the resulting context |
//! | `config` | Effective configuration |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//! - `yaml` - YAML
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! starter --verbose create demo --features micrometer-dynatrace
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config_cmd;
mod create;
mod feature_cmd;
mod output;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
