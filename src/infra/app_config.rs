use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Site whose content the history dialog targets.
    pub active_site: String,
    pub rows_per_page: usize,
    /// JSON version catalog used by the in-memory service.
    pub catalog_path: Option<PathBuf>,
    /// Name recorded on versions created by a revert.
    pub editor: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            active_site: "default".to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            catalog_path: None,
            editor: "studio".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &std::path::Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str::<AppConfig>(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> std::io::Result<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, contents)
}

/// `$STUDIO_HISTORY_CONFIG_PATH` when set, otherwise
/// `studio-history/config.toml` under the user's config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("STUDIO_HISTORY_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    default_config_path(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        home::home_dir(),
    )
}

fn default_config_path(config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    config_home
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|dir| dir.join("studio-history").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".studio-history.toml"))
}
