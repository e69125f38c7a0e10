use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::viewport::DEFAULT_BLOCKS_PER_FRAGMENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    MissingHomeDirectory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read viewer config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse viewer config")]
    ParseConfig(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

const APP_DIR: &str = "mapview";
const APP_CONFIG_FILE: &str = "config.json";
const DEFAULT_AREA_CLOSE_SNAP_PX: f64 = 8.0;

/// Viewer settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Keeps the scale from dropping below 32 pixels per 512-block fragment.
    pub restrict_max_zoom: bool,
    pub blocks_per_fragment: u32,
    /// Screen distance within which a press snaps onto an area's first vertex.
    pub area_close_snap_px: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            restrict_max_zoom: true,
            blocks_per_fragment: DEFAULT_BLOCKS_PER_FRAGMENT,
            area_close_snap_px: DEFAULT_AREA_CLOSE_SNAP_PX,
        }
    }
}

impl ViewerConfig {
    fn normalized(mut self) -> Self {
        if self.blocks_per_fragment == 0 {
            self.blocks_per_fragment = DEFAULT_BLOCKS_PER_FRAGMENT;
        }
        if !self.area_close_snap_px.is_finite() || self.area_close_snap_px < 0.0 {
            self.area_close_snap_px = DEFAULT_AREA_CLOSE_SNAP_PX;
        }
        self
    }
}

pub fn load_viewer_config() -> ViewerConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_viewer_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_viewer_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ViewerConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return ViewerConfig::default(),
    };
    load_viewer_config_from(&path).unwrap_or_else(|err| {
        tracing::warn!(%err, ?path, "failed to load config.json; using defaults");
        ViewerConfig::default()
    })
}

/// Reads `path`, treating a missing file as default settings.
pub fn load_viewer_config_from(path: &Path) -> ConfigResult<ViewerConfig> {
    if !path.exists() {
        return Ok(ViewerConfig::default());
    }
    read_viewer_config(path)
}

pub fn read_viewer_config(path: &Path) -> ConfigResult<ViewerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ViewerConfig = serde_json::from_str(&contents)?;
    Ok(config.normalized())
}

pub fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
