//! Configuration display command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::config::Config;

pub fn show(output: &Output, config: &Config, explicit: Option<&Path>) -> Result<()> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Config::global_config_path().filter(|p| p.exists()),
    };

    if !output.is_text() {
        output.data(&serde_json::json!({
            "path": source.as_ref().map(|p| p.display().to_string()),
            "config": config,
        }));
        return Ok(());
    }

    match &source {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults (no config file)"),
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
