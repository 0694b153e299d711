//! Where stickers come from and where they are cached.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::StickerConfig;
use crate::sticker_path;
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct StickerContext {
    /// Root of the local cache; stickers live under `<storage_root>/stickers`.
    pub storage_root: PathBuf,
    /// Remote base URL for assets and their checksum files.
    pub assets_url: String,
}

impl StickerContext {
    pub fn new(storage_root: impl Into<PathBuf>, assets_url: impl Into<String>) -> Self {
        Self {
            storage_root: storage_root.into(),
            assets_url: assets_url.into(),
        }
    }

    /// Build from config, validating the assets URL.
    pub fn from_config(cfg: &StickerConfig) -> Result<Self> {
        sticker_path::validate_assets_url(&cfg.assets_url)?;
        Ok(Self::new(cfg.resolve_storage_root()?, cfg.assets_url.clone()))
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    pub fn local_sticker_path(&self, theme: &Theme) -> PathBuf {
        sticker_path::resolve_local_sticker_path(theme, &self.storage_root)
    }
}
