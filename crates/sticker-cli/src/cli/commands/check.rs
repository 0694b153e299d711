//! `sticker-sync check <theme>` – compare cached and published checksums.

use anyhow::{Context, Result};
use sticker_core::staleness::{self, LocalChecksum, StickerCheck};

use super::Session;

pub async fn run_check(session: &Session, theme_id: &str) -> Result<()> {
    let theme = session.theme(theme_id)?;
    let ctx = session.ctx.clone();
    let http = session.client();
    let local = ctx.local_sticker_path(&theme);
    let check = tokio::task::spawn_blocking(move || {
        staleness::check_sticker(&http, &ctx.assets_url, &theme, &local)
    })
    .await
    .context("check task join")?;

    match &check {
        StickerCheck::Stale { remote, local } => {
            println!("stale");
            println!("  remote: {}", remote);
            match local {
                LocalChecksum::Present(digest) => println!("  local:  {}", digest),
                LocalChecksum::Missing => println!("  local:  (not downloaded)"),
            }
        }
        other => println!("{}", other),
    }
    Ok(())
}
