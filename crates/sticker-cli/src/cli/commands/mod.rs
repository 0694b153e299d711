//! CLI command handlers, one file per command.

mod check;
mod checksum;
mod install;
mod path;
mod update;

pub use check::run_check;
pub use checksum::run_checksum;
pub use install::run_install;
pub use path::run_path;
pub use update::run_update;

use anyhow::Result;
use sticker_core::config::StickerConfig;
use sticker_core::http::{CurlClient, HttpOptions};
use sticker_core::{StickerContext, Theme, ThemeCatalog};

/// Everything a theme command needs, resolved from config.
#[derive(Debug, Clone)]
pub struct Session {
    pub ctx: StickerContext,
    pub catalog: ThemeCatalog,
    pub http: HttpOptions,
}

impl Session {
    pub fn load(cfg: &StickerConfig) -> Result<Self> {
        let ctx = StickerContext::from_config(cfg)?;
        let catalog = ThemeCatalog::load(&cfg.resolve_themes_file()?)?;
        Ok(Self {
            ctx,
            catalog,
            http: cfg.http_options(),
        })
    }

    pub fn theme(&self, id: &str) -> Result<Theme> {
        Ok(self.catalog.require(id)?.clone())
    }

    pub fn client(&self) -> CurlClient {
        CurlClient::new(self.http)
    }
}
