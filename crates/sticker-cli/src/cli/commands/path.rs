//! `sticker-sync path <theme>` – print the cached sticker location.

use anyhow::Result;

use super::Session;

pub fn run_path(session: &Session, theme_id: &str) -> Result<()> {
    let theme = session.theme(theme_id)?;
    let path = session.ctx.local_sticker_path(&theme);
    let marker = if path.exists() { "" } else { "  (not downloaded)" };
    println!("{}{}", path.display(), marker);
    Ok(())
}
