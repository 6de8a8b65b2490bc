use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::MacroGoalInput;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "macro_tracker.toml";

/// Settings read from the optional TOML config file.
///
/// ```toml
/// catalog = "foods.json"
/// log_level = "info"
///
/// [goals]
/// calories = 2200
/// protein_percentage = 35
/// carbs_percentage = 40
/// fats_percentage = 25
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog file (JSON or CSV). The built-in catalog is used when unset.
    pub catalog: Option<PathBuf>,

    /// Tracing filter directive, e.g. `info` or `macro_tracker_rs=debug`.
    pub log_level: Option<String>,

    /// Starting goals for a new session.
    pub goals: MacroGoalInput,
}

/// Parse a config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        TrackerError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Resolve the config for this run.
///
/// An explicitly requested file must exist. The default file is optional and
/// its absence yields [`AppConfig::default`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load_config(path)
            } else {
                debug!("no config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}
