use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

/// Years offered by the wrapped view, newest first.
pub const WRAPPED_YEARS: [i32; 10] = [2025, 2024, 2023, 2022, 2021, 2020, 2019, 2018, 2017, 2016];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Entries are selected when their file name starts with this prefix...
    #[serde(default = "default_entry_prefix")]
    pub entry_prefix: String,
    /// ...and their name ends with this suffix.
    #[serde(default = "default_entry_suffix")]
    pub entry_suffix: String,
    /// Plays of this many milliseconds or less are skips and get dropped.
    #[serde(default = "default_min_ms_played")]
    pub min_ms_played: u64,
    #[serde(default = "default_wrapped_years")]
    pub wrapped_years: Vec<i32>,
    /// Rows printed per table (0 = all).
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_entry_prefix() -> String {
    "Streaming_History_Audio".to_string()
}
fn default_entry_suffix() -> String {
    ".json".to_string()
}
fn default_min_ms_played() -> u64 {
    60_000
}
fn default_wrapped_years() -> Vec<i32> {
    WRAPPED_YEARS.to_vec()
}
fn default_max_rows() -> usize {
    25
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_prefix: default_entry_prefix(),
            entry_suffix: default_entry_suffix(),
            min_ms_played: default_min_ms_played(),
            wrapped_years: default_wrapped_years(),
            max_rows: default_max_rows(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hiasify")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hiasify.conf")
    }

    /// Config file in use: the `--config` override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent folders.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Whether `year` is one of the selectable wrapped years.
    pub fn is_wrapped_year(&self, year: i32) -> bool {
        self.wrapped_years.contains(&year)
    }

    /// The year preselected by the wrapped view.
    pub fn default_wrapped_year(&self) -> AppResult<i32> {
        self.wrapped_years
            .first()
            .copied()
            .ok_or_else(|| AppError::Config("no wrapped_years configured".to_string()))
    }
}
