//! Run configuration loading.

use crate::domain::{AppError, RunConfig};
use crate::ports::ProjectStore;

/// Load `launch-control.toml`, falling back to defaults when the file is absent.
pub fn load_config(project: &(impl ProjectStore + ?Sized)) -> Result<RunConfig, AppError> {
    match project.read_config()? {
        Some(content) => parse_config_content(&content),
        None => Ok(RunConfig::default()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RunConfig, AppError> {
    let config: RunConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
