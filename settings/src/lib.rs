//! Race timer settings.
//!
//! Shipped defaults cover every setting. A local override file
//! (`~/.racetimer/localSettings.yaml` by default) may set any subset; its
//! values win field by field.
//!
//! # Example
//!
//! ```rust
//! use racetimer_settings::{resolve, Overrides, Settings};
//!
//! let overrides: Overrides = serde_yaml::from_str("DEFAULT_LAPS: 25").unwrap();
//! let settings = resolve(Settings::default(), Some(overrides));
//! assert_eq!(settings.default_laps, 25);
//! assert_eq!(settings.debounce, 500);
//! ```

mod settings;
pub mod types;

#[cfg(test)]
mod tests;

pub use settings::{resolve, Overrides, Settings};
pub use types::{AudioMode, GameSound, InterruptPort, InterruptVector, LaneBinding, Pin};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default base directory name, under the home directory.
pub const DEFAULT_BASE_DIR: &str = ".racetimer";
/// Default override filename.
pub const DEFAULT_SETTINGS_FILE: &str = "localSettings.yaml";

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings: invalid pin '{0}'")]
    InvalidPin(String),

    #[error("settings: cannot determine settings path")]
    NoSettingsPath,

    #[error("settings: read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings: parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Gets the default override file path.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(DEFAULT_SETTINGS_FILE))
}

impl Overrides {
    /// Parses overrides from YAML text. An empty document sets nothing.
    pub fn from_yaml(text: &str) -> SettingsResult<Overrides> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        if value.is_null() {
            return Ok(Overrides::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }
}

/// Loads the override file at `path`. A missing file means no overrides.
pub fn load_overrides(path: &Path) -> SettingsResult<Option<Overrides>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no override file");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = Overrides::from_yaml(&content).map_err(|err| match err {
        SettingsError::Yaml(source) => SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        keys = ?overrides.keys(),
        "loaded overrides"
    );
    Ok(Some(overrides))
}

/// Resolves the override file path: `custom_path` or the default location.
pub fn settings_path(custom_path: Option<&Path>) -> SettingsResult<PathBuf> {
    match custom_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_settings_path().ok_or(SettingsError::NoSettingsPath),
    }
}

/// Loads the effective settings: shipped defaults plus the override file.
pub fn load_settings(custom_path: Option<&Path>) -> SettingsResult<Settings> {
    let path = settings_path(custom_path)?;
    let overrides = load_overrides(&path)?;
    Ok(resolve(Settings::default(), overrides))
}
