//! Configuration file handling for starfall.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/starfall/config.toml` on Linux).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starfall_core::{AnimationSpeed, ColorPair, GlowColor};
use thiserror::Error;
use tracing::{debug, warn};

/// Stars per batch when nothing else is configured.
pub const DEFAULT_COUNT: usize = 12;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory to place the config file in.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`Config`].
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stars per batch.
    pub count: usize,
    /// Fixed seed for reproducible batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Preview playback speed.
    pub speed: AnimationSpeed,
    /// Per-color overrides of the built-in palette.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub palette: BTreeMap<GlowColor, ColorPair>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            speed: AnimationSpeed::default(),
            palette: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "starfall")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load config, using defaults");
            Self::default()
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use starfall_core::Rgb;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.count, DEFAULT_COUNT);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = 42\nspeed = \"fast\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.count, DEFAULT_COUNT);
        assert!(config.palette.is_empty());
    }

    #[test]
    fn test_palette_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[palette.red]\nrgb = [200, 0, 40]\nglow = [220, 80, 90]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.palette.get(&GlowColor::Red),
            Some(&ColorPair::new(Rgb::new(200, 0, 40), Rgb::new(220, 80, 90)))
        );
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config {
            count: 30,
            seed: Some(7),
            speed: AnimationSpeed::Slow,
            ..Default::default()
        };
        config.palette.insert(GlowColor::White, ColorPair::WHITE);

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "count = \"many\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
