use super::Config;
use anyhow::{Context, Result};
use glob::Pattern;

/// Parse and validate a TOML configuration document
///
/// # Errors
///
/// Returns an error if the TOML is malformed, has unknown keys, or a value
/// fails [`validate_config`].
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse TOML config")?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject configurations the synchronizer cannot run with
///
/// # Errors
///
/// Returns an error naming the offending key.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.manifest_path.as_os_str().is_empty() {
        anyhow::bail!("manifest_path must not be empty");
    }

    if config.images_dir.as_os_str().is_empty() {
        anyhow::bail!("images_dir must not be empty");
    }

    if config.pattern.is_empty() {
        anyhow::bail!("pattern must not be empty");
    }

    // The pattern is matched against bare file names
    if config.pattern.contains('/') {
        anyhow::bail!("pattern must match file names, not paths: {}", config.pattern);
    }

    Pattern::new(&config.pattern)
        .with_context(|| format!("pattern is not a valid glob: {}", config.pattern))?;

    Ok(())
}
