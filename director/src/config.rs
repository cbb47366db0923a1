use std::path::Path;

use anyhow::{Context, Result};
use director_core::{BackendPoolConfig, DirectorConfig};

/// Loads the base director config from `path`, or an empty one if no path
/// was given -- annotation-derived routes are still meaningful on their
/// own.
pub fn load_director(path: Option<&Path>) -> Result<DirectorConfig> {
    let Some(path) = path else {
        return Ok(DirectorConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading base director config at {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing base director config at {}", path.display()))
}

pub fn load_backendpool(path: Option<&Path>) -> Result<BackendPoolConfig> {
    let Some(path) = path else {
        return Ok(BackendPoolConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading base backend pool config at {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing base backend pool config at {}", path.display()))
}
