use crate::errors::{AppError, AppResult};
use crate::models::{ColumnNames, Profile, RosterSchema};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the roster lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Local flat CSV file
    #[default]
    Csv,
    /// Worksheet in a sheet database, read and overwritten as a whole
    Sheet,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Csv => "csv",
            Backend::Sheet => "sheet",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreSettings {
    #[serde(default = "default_points")]
    pub default_points: i64,
    /// Reject negative values when a score is set directly from the admin
    /// editor. Point adjustments are never clamped.
    #[serde(default = "default_floor_at_zero")]
    pub floor_at_zero: bool,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            default_points: default_points(),
            floor_at_zero: default_floor_at_zero(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    /// Store location; the backend's default file when unset.
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_profile")]
    pub profile: Profile,
    /// Header labels; profile defaults when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnNames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_tag: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_report_prefix")]
    pub report_prefix: String,
    #[serde(default)]
    pub app_url: String,
    #[serde(default)]
    pub scores: ScoreSettings,
}

/// Top-level keys a complete configuration file carries.
pub const CONFIG_KEYS: &[&str] = &[
    "backend",
    "store",
    "sheet_name",
    "profile",
    "seed",
    "admin_password",
    "report_prefix",
    "app_url",
    "scores",
];

fn default_sheet_name() -> String {
    "attendance".to_string()
}
fn default_profile() -> Profile {
    Profile::RollCall
}
fn default_seed() -> Vec<String> {
    vec!["小明".to_string(), "小華".to_string()]
}
fn default_admin_password() -> String {
    "rollcall-admin".to_string()
}
fn default_report_prefix() -> String {
    "Attendance".to_string()
}
fn default_points() -> i64 {
    5
}
fn default_floor_at_zero() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Csv,
            store: None,
            sheet_name: default_sheet_name(),
            profile: default_profile(),
            columns: None,
            mode_tag: None,
            seed: default_seed(),
            admin_password: default_admin_password(),
            report_prefix: default_report_prefix(),
            app_url: String::new(),
            scores: ScoreSettings::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Default store location for a backend
    pub fn store_file(backend: Backend) -> PathBuf {
        match backend {
            Backend::Csv => Self::config_dir().join("attendance_db.csv"),
            Backend::Sheet => Self::config_dir().join("attendance.sheet.sqlite"),
        }
    }

    /// Load configuration from `path` (or the standard file), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), backend = cfg.backend.as_str(), "config loaded");
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Store path with `~/` expanded, or the default file of the backend.
    pub fn store_path(&self) -> PathBuf {
        match self.store.as_deref() {
            Some(store) if !store.trim().is_empty() => expand_tilde(store),
            _ => Self::store_file(self.backend),
        }
    }

    /// Layout of the roster table for this configuration.
    pub fn schema(&self) -> RosterSchema {
        let schema = RosterSchema::new(self.profile).with_mode_tag(self.mode_tag.clone());
        match &self.columns {
            Some(columns) => schema.with_columns(columns.clone()),
            None => schema,
        }
    }

    /// Top-level keys absent from a configuration file.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))?;

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}
