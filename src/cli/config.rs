use float12::CodecConfig;
use std::path::PathBuf;

use super::global::GlobalArgs;

/// Loads the configuration named by `--config`, or the built-in settings
/// with user and project overrides applied.
pub fn load_config(global: &GlobalArgs) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
            log::info!("loading config from {:?}", expanded);
            CodecConfig::load_from_file(&expanded)?
        }
        None => CodecConfig::load_with_overrides()?,
    };
    config.validate()?;
    log::debug!("effective config: {:?}", config);
    Ok(config)
}

/// Rejects a zero suspend count given on the command line.
pub fn checked_suspend(value: Option<usize>, flag: &str) -> Result<Option<usize>, String> {
    match value {
        Some(0) => Err(format!("{} must be greater than 0", flag)),
        other => Ok(other),
    }
}
