//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{config_cmd, create, feature_cmd};
use crate::config::Config;
use crate::domain::{ApplicationType, BuildTool, Language, TestFramework};
use crate::feature::FeatureRegistry;

#[derive(Parser)]
#[command(name = "starter")]
#[command(author, version, about = "Inspect features and preview project generation")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, env = "STARTER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available features
    List {
        /// Only features supporting this application type
        #[arg(long = "type", short = 't')]
        application_type: Option<ApplicationType>,

        /// Include hidden features
        #[arg(long)]
        all: bool,
    },

    /// Show details of a feature
    Show {
        /// Feature name
        name: String,
    },

    /// Generate a project and print the resulting context
    Create {
        /// Project name
        name: String,

        /// Application type
        #[arg(long = "type", short = 't')]
        application_type: Option<ApplicationType>,

        /// Features to select (comma separated or repeated)
        #[arg(long, value_delimiter = ',')]
        features: Vec<String>,

        /// Source language
        #[arg(long)]
        lang: Option<Language>,

        /// Build tool
        #[arg(long)]
        build: Option<BuildTool>,

        /// Test framework
        #[arg(long)]
        test: Option<TestFramework>,

        /// Target JDK version
        #[arg(long)]
        java_version: Option<u32>,
    },

    /// Show the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Starter CLI starting");

    let registry = FeatureRegistry::builtin();
    registry.validate()?;
    output.verbose_ctx("registry", &format!("{} features registered", registry.len()));

    match cli.command {
        Commands::List { application_type, all } => {
            feature_cmd::list(&output, &registry, application_type, all)?
        }
        Commands::Show { name } => feature_cmd::show(&output, &registry, &name)?,
        Commands::Create {
            name,
            application_type,
            features,
            lang,
            build,
            test,
            java_version,
        } => {
            let args = create::CreateArgs {
                name,
                application_type,
                features,
                lang,
                build,
                test,
                java_version,
            };
            create::run(&output, &registry, &config, args)?
        }
        Commands::Config => config_cmd::show(&output, &config, cli.config.as_deref())?,
    }

    Ok(())
}
