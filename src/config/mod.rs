use crate::errors::{AppError, AppResult};
use crate::models::City;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a specific weekday filter is matched against the loaded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilterMode {
    /// Compare the weekday name with the weekday index (monday = 0).
    /// Nothing ever matches, so a specific day always yields an empty table.
    #[default]
    Literal,
    /// Keep the rows whose weekday name equals the requested day.
    ByName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cities")]
    pub cities: BTreeMap<String, String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub day_filter: DayFilterMode,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_cities() -> BTreeMap<String, String> {
    City::ALL
        .into_iter()
        .map(|c| (c.key().to_string(), c.default_file().to_string()))
        .collect()
}
fn default_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities: default_cities(),
            page_size: default_page_size(),
            day_filter: DayFilterMode::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from `path`.
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// Resolve the data file configured for `city`.
    /// Relative paths are joined to `data_dir`.
    pub fn city_file(&self, city: City) -> AppResult<PathBuf> {
        let file = self.cities.get(city.key()).ok_or_else(|| {
            AppError::Config(format!("no data file configured for '{}'", city.key()))
        })?;

        let p = expand_tilde(file);
        if p.is_absolute() {
            Ok(p)
        } else {
            Ok(expand_tilde(&self.data_dir).join(p))
        }
    }

    /// Separator line printed between report sections
    pub fn separator(&self) -> String {
        self.separator_char.repeat(40)
    }

    /// Write this configuration as YAML. An existing file is kept unless `force`.
    pub fn write_to(&self, path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
