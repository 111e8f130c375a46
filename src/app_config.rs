use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the cache and export directories
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Name of the directory with descriptors and data files
    #[serde(default = "default_cache_dir_name")]
    pub cache_dir_name: String,

    /// Name of the directory receiving exported pairs
    #[serde(default = "default_export_dir_name")]
    pub export_dir_name: String,

    /// What happens to a word whose last translation is deleted
    #[serde(default)]
    pub empty_list_policy: EmptyListPolicy,

    /// How an export treats an existing destination file
    #[serde(default)]
    pub export_mode: ExportMode,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Behavior when deleting the last translation of a word
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyListPolicy {
    // @policy: Drop the word together with its empty list
    #[default]
    RemoveKey,
    // @policy: Leave the word with an empty list
    Keep,
}

/// Behavior when exporting into a file that already exists
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    // @mode: Destination holds only the exported pair
    #[default]
    Reset,
    // @mode: Exported pair is added to the destination's content
    Merge,
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reset => write!(f, "reset"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log crate
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_root_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("vocabman"),
        None => PathBuf::from("vocabman"),
    }
}

fn default_cache_dir_name() -> String {
    "cache".to_string()
}

fn default_export_dir_name() -> String {
    "export".to_string()
}

impl Config {
    /// Configuration rooted at an explicit directory, other settings default
    pub fn with_root<P: Into<PathBuf>>(root_dir: P) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Directory scanned for dictionary descriptors
    pub fn cache_dir(&self) -> PathBuf {
        self.root_dir.join(&self.cache_dir_name)
    }

    /// Directory receiving exported pairs
    pub fn export_dir(&self) -> PathBuf {
        self.root_dir.join(&self.export_dir_name)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(anyhow!("Root directory must not be empty"));
        }

        for (label, name) in [
            ("cache", &self.cache_dir_name),
            ("export", &self.export_dir_name),
        ] {
            if name.trim().is_empty() {
                return Err(anyhow!("The {} directory name must not be empty", label));
            }
            if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
                return Err(anyhow!(
                    "The {} directory name must be a plain name, got '{}'",
                    label,
                    name
                ));
            }
        }

        if self.cache_dir_name == self.export_dir_name {
            return Err(anyhow!(
                "Cache and export directories must differ (both are '{}')",
                self.cache_dir_name
            ));
        }

        Ok(())
    }

    /// Load the configuration at `path`, writing a default one if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if FileManager::file_exists(path) {
            let content = FileManager::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        FileManager::write_to_file(path, &config_json)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            root_dir: default_root_dir(),
            cache_dir_name: default_cache_dir_name(),
            export_dir_name: default_export_dir_name(),
            empty_list_policy: EmptyListPolicy::default(),
            export_mode: ExportMode::default(),
            log_level: LogLevel::default(),
        }
    }
}
