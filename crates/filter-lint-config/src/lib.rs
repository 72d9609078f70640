use filter_lint_engine::{UnknownKeywordPolicy, ValidationData};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read {dataset} dataset at {path}: {source}")]
    DatasetReadError {
        dataset: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Files that replace the builtin vocabularies, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datasets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bases: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sounds: Option<PathBuf>,
}

/// Values accepted in addition to the vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Whitelist {
    pub classes: Vec<String>,
    pub bases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unknown_keywords: UnknownKeywordPolicy,
    pub datasets: Datasets,
    pub whitelist: Whitelist,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in dataset paths
        for path in [
            &mut config.datasets.classes,
            &mut config.datasets.bases,
            &mut config.datasets.sounds,
        ]
        .into_iter()
        .flatten()
        {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/filter-lint");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds the vocabularies the engine validates against: the builtin
    /// lists, with any configured dataset replacing its builtin counterpart.
    pub fn validation_data(&self) -> Result<ValidationData, ConfigError> {
        let mut data = ValidationData::builtin();
        if let Some(path) = &self.datasets.classes {
            data.valid_classes = read_dataset("classes", path)?;
        }
        if let Some(path) = &self.datasets.bases {
            data.valid_bases = read_dataset("bases", path)?;
        }
        if let Some(path) = &self.datasets.sounds {
            data.valid_sounds = read_dataset("sounds", path)?;
        }
        data.class_whitelist = self.whitelist.classes.clone();
        data.base_whitelist = self.whitelist.bases.clone();
        data.unknown_keywords = self.unknown_keywords;
        Ok(data)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// One entry per line; blank lines and `#` comments are skipped.
fn read_dataset(dataset: &'static str, path: &Path) -> Result<Vec<String>, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ConfigError::DatasetReadError {
            dataset,
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
