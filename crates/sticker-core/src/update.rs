//! Update orchestration: check the active theme's sticker and reinstall it when stale.

use anyhow::Result;

use crate::context::StickerContext;
use crate::http::HttpGet;
use crate::installer::Installer;
use crate::staleness::{self, StickerCheck, StickerUpdateStatus};
use crate::theme::Theme;

/// Check `theme`'s cached sticker and install a fresh copy if it is stale.
///
/// The installer runs exactly once for `Stale` and never otherwise; a failed
/// check is logged and left alone. Returns the check that was acted on.
/// Installer errors are propagated.
pub fn attempt_to_update_sticker<H, I>(
    theme: &Theme,
    ctx: &StickerContext,
    http: &H,
    installer: &I,
) -> Result<StickerCheck>
where
    H: HttpGet + ?Sized,
    I: Installer + ?Sized,
{
    let local_sticker = ctx.local_sticker_path(theme);
    let check = staleness::check_sticker(http, &ctx.assets_url, theme, &local_sticker);
    match &check {
        StickerCheck::Stale { .. } => {
            installer.install(theme, ctx, StickerUpdateStatus::Stale)?;
        }
        StickerCheck::Current => {
            tracing::debug!(theme = %theme.id, "sticker is current");
        }
        StickerCheck::CheckFailed(e) => {
            tracing::warn!("Unable to check for updates: {}", e);
        }
    }
    Ok(check)
}
