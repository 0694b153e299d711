//! Sticker path normalization and derivation of local paths and remote URLs.
//!
//! Sticker paths in theme metadata may use Windows separators. Everything
//! that leaves this module (URLs, the local cache layout) uses `/`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::theme::Theme;

/// Directory under the storage root holding cached stickers.
pub const STICKERS_DIR: &str = "stickers";

/// Suffix of the published checksum file next to each asset.
pub const CHECKSUM_SUFFIX: &str = ".checksum.txt";

/// Replaces every `\` with `/`. Idempotent.
///
/// - `clean_path_to_url("a\\b\\c")` → `"a/b/c"`
pub fn clean_path_to_url(sticker_path: &str) -> String {
    sticker_path.replace('\\', "/")
}

/// Normalized (URL-safe) sticker path of a theme.
pub fn sticker_path_to_url(theme: &Theme) -> String {
    clean_path_to_url(&theme.sticker.path)
}

/// Sticker path with leading slashes removed, so it can be joined under a base.
fn relative_sticker_path(theme: &Theme) -> String {
    sticker_path_to_url(theme).trim_start_matches('/').to_string()
}

/// `<storage_root>/stickers/<normalized sticker path>`.
///
/// Empty, `.` and `..` segments are dropped, so the result always stays
/// under `<storage_root>/stickers`.
pub fn resolve_local_sticker_path(theme: &Theme, storage_root: &Path) -> PathBuf {
    let mut path = storage_root.join(STICKERS_DIR);
    for segment in relative_sticker_path(theme)
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
    {
        path.push(segment);
    }
    path
}

/// `<assets_url>/<normalized sticker path>`.
pub fn asset_url(assets_url: &str, theme: &Theme) -> String {
    format!(
        "{}/{}",
        assets_url.trim_end_matches('/'),
        relative_sticker_path(theme)
    )
}

/// `<assets_url>/<normalized sticker path>.checksum.txt`.
pub fn checksum_url(assets_url: &str, theme: &Theme) -> String {
    format!("{}{}", asset_url(assets_url, theme), CHECKSUM_SUFFIX)
}

/// Rejects base URLs that do not parse or are not http(s).
pub fn validate_assets_url(assets_url: &str) -> Result<()> {
    let parsed = url::Url::parse(assets_url)
        .with_context(|| format!("invalid assets URL: {}", assets_url))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("assets URL must be http or https, got {}", other),
    }
}
