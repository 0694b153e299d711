use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::HttpOptions;

/// Base URL that sticker assets and their `.checksum.txt` files are served from.
pub const DEFAULT_ASSETS_URL: &str = "https://doki.assets.unthrottled.io/stickers/vscode";

const APP_PREFIX: &str = "sticker-sync";

/// HTTP timeouts (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, body included.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
        }
    }
}

impl HttpConfig {
    pub fn options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/sticker-sync/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerConfig {
    /// Remote base URL for sticker assets.
    #[serde(default = "default_assets_url")]
    pub assets_url: String,
    /// Root directory for cached stickers (None = XDG data home).
    #[serde(default)]
    pub storage_root: Option<PathBuf>,
    /// JSON theme catalog (None = `themes.json` next to config.toml).
    #[serde(default)]
    pub themes_file: Option<PathBuf>,
    /// Optional HTTP timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

fn default_assets_url() -> String {
    DEFAULT_ASSETS_URL.to_string()
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            assets_url: default_assets_url(),
            storage_root: None,
            themes_file: None,
            http: None,
        }
    }
}

impl StickerConfig {
    pub fn http_options(&self) -> HttpOptions {
        self.http.clone().unwrap_or_default().options()
    }

    /// Storage root from config, or `~/.local/share/sticker-sync`.
    pub fn resolve_storage_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.storage_root {
            return Ok(root.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
        Ok(xdg_dirs.get_data_home())
    }

    /// Theme catalog path from config, or `~/.config/sticker-sync/themes.json`.
    pub fn resolve_themes_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.themes_file {
            return Ok(path.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
        Ok(xdg_dirs.get_config_home().join("themes.json"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StickerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StickerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: StickerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
