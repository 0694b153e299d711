//! `sticker-sync update <theme>` – reinstall the sticker when stale.

use anyhow::{Context, Result};
use sticker_core::installer::StickerInstaller;
use sticker_core::staleness::StickerCheck;
use sticker_core::update;

use super::Session;

pub async fn run_update(session: &Session, theme_id: &str) -> Result<()> {
    let theme = session.theme(theme_id)?;
    let ctx = session.ctx.clone();
    let http = session.client();
    let installer = StickerInstaller::new(session.client());
    let local = ctx.local_sticker_path(&theme);

    let check = tokio::task::spawn_blocking(move || {
        update::attempt_to_update_sticker(&theme, &ctx, &http, &installer)
    })
    .await
    .context("update task join")??;

    match check {
        StickerCheck::Stale { .. } => println!("updated {}", local.display()),
        StickerCheck::Current => println!("current {}", local.display()),
        StickerCheck::CheckFailed(e) => println!("not updated: {}", e),
    }
    Ok(())
}
