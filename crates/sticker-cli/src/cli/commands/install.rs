//! `sticker-sync install <theme>` – download the sticker unconditionally.

use anyhow::{Context, Result};
use sticker_core::installer::{Installer, StickerInstaller};
use sticker_core::StickerUpdateStatus;

use super::Session;

pub async fn run_install(session: &Session, theme_id: &str) -> Result<()> {
    let theme = session.theme(theme_id)?;
    let ctx = session.ctx.clone();
    let installer = StickerInstaller::new(session.client());

    let path = tokio::task::spawn_blocking(move || {
        installer.install(&theme, &ctx, StickerUpdateStatus::NotChecked)
    })
    .await
    .context("install task join")??;

    println!("installed {}", path.display());
    Ok(())
}
