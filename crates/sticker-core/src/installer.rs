//! Sticker installation: download the asset and atomically replace the cached copy.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::StickerContext;
use crate::http::HttpGet;
use crate::staleness::StickerUpdateStatus;
use crate::sticker_path;
use crate::theme::Theme;

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` (e.g. `rem.png` → `rem.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Downloads and persists a theme's sticker.
pub trait Installer {
    /// Install the sticker of `theme` into the cache of `ctx`; returns the local path.
    fn install(
        &self,
        theme: &Theme,
        ctx: &StickerContext,
        reason: StickerUpdateStatus,
    ) -> Result<PathBuf>;
}

/// Installer that GETs `<assets_url>/<sticker path>` into the cache.
#[derive(Debug, Clone)]
pub struct StickerInstaller<H> {
    http: H,
}

impl<H: HttpGet> StickerInstaller<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

impl<H: HttpGet> Installer for StickerInstaller<H> {
    fn install(
        &self,
        theme: &Theme,
        ctx: &StickerContext,
        reason: StickerUpdateStatus,
    ) -> Result<PathBuf> {
        let url = sticker_path::asset_url(&ctx.assets_url, theme);
        let final_path = ctx.local_sticker_path(theme);
        let part = temp_path(&final_path);
        tracing::info!(theme = %theme.id, %reason, "installing sticker from {}", url);

        if let Some(dir) = final_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create sticker dir {}", dir.display()))?;
        }

        let bytes = match self.http.get_to_file(&url, &part) {
            Ok(n) => n,
            Err(e) => {
                if let Err(rm) = fs::remove_file(&part) {
                    tracing::debug!("no temp file to clean up at {}: {}", part.display(), rm);
                }
                return Err(e).with_context(|| format!("download sticker for {}", theme.id));
            }
        };

        fs::rename(&part, &final_path).with_context(|| {
            format!(
                "rename {} -> {}",
                part.display(),
                final_path.display()
            )
        })?;
        tracing::info!(bytes, "sticker installed at {}", final_path.display());
        Ok(final_path)
    }
}
