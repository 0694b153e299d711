//! Staleness check: compare the published checksum of a sticker with the
//! checksum of the cached copy.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::http::{FetchError, HttpGet};
use crate::sticker_path;
use crate::theme::Theme;

/// Stands in for the local checksum when nothing is cached. Contains
/// non-hex characters, so it never equals a published digest.
pub const NOT_DOWNLOADED: &str = "sticker not downloaded";

/// Reason code handed to the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerUpdateStatus {
    Current,
    Stale,
    NotChecked,
}

impl fmt::Display for StickerUpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StickerUpdateStatus::Current => write!(f, "current"),
            StickerUpdateStatus::Stale => write!(f, "stale"),
            StickerUpdateStatus::NotChecked => write!(f, "not checked"),
        }
    }
}

/// The update check could not be completed.
#[derive(Debug, thiserror::Error)]
pub enum UpdateCheckError {
    #[error("fetching remote checksum: {0}")]
    Remote(#[from] FetchError),
    #[error("remote checksum at {url} is empty")]
    EmptyRemoteChecksum { url: String },
    #[error("reading local sticker {}: {source}", path.display())]
    LocalRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Checksum of the cached copy, or its absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalChecksum {
    Present(String),
    Missing,
}

impl LocalChecksum {
    pub fn as_str(&self) -> &str {
        match self {
            LocalChecksum::Present(digest) => digest,
            LocalChecksum::Missing => NOT_DOWNLOADED,
        }
    }
}

/// Outcome of a staleness check.
#[derive(Debug)]
pub enum StickerCheck {
    /// Local checksum equals the published one.
    Current,
    /// Checksums differ or nothing is cached.
    Stale { remote: String, local: LocalChecksum },
    /// Network failure, missing remote resource, malformed response or read error.
    CheckFailed(UpdateCheckError),
}

impl StickerCheck {
    /// Fail-safe reading: only a completed check with a mismatch is stale.
    pub fn is_stale(&self) -> bool {
        matches!(self, StickerCheck::Stale { .. })
    }

    pub fn status(&self) -> StickerUpdateStatus {
        match self {
            StickerCheck::Current => StickerUpdateStatus::Current,
            StickerCheck::Stale { .. } => StickerUpdateStatus::Stale,
            StickerCheck::CheckFailed(_) => StickerUpdateStatus::NotChecked,
        }
    }
}

impl fmt::Display for StickerCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StickerCheck::Current => write!(f, "current"),
            StickerCheck::Stale { .. } => write!(f, "stale"),
            StickerCheck::CheckFailed(e) => write!(f, "check failed: {}", e),
        }
    }
}

/// GET `<assets_url>/<sticker path>.checksum.txt`, trimmed of surrounding whitespace.
pub fn fetch_remote_checksum<H: HttpGet + ?Sized>(
    http: &H,
    assets_url: &str,
    theme: &Theme,
) -> Result<String, UpdateCheckError> {
    let url = sticker_path::checksum_url(assets_url, theme);
    tracing::info!("Fetching checksum: {}", url);
    let body = http.get_text(&url)?;
    let digest = body.trim();
    if digest.is_empty() {
        return Err(UpdateCheckError::EmptyRemoteChecksum { url });
    }
    Ok(digest.to_string())
}

/// MD5 of the cached sticker, or `Missing` if the file does not exist.
///
/// Failing to tell whether the file exists (e.g. permission denied on the
/// parent) is a read error, not a missing file.
pub fn fetch_local_checksum(local_sticker: &Path) -> Result<LocalChecksum, UpdateCheckError> {
    let read_err = |source| UpdateCheckError::LocalRead {
        path: local_sticker.to_path_buf(),
        source,
    };
    let exists = local_sticker
        .try_exists()
        .map_err(|e| read_err(anyhow::Error::new(e)))?;
    if !exists {
        return Ok(LocalChecksum::Missing);
    }
    checksum::checksum_path(local_sticker)
        .map(LocalChecksum::Present)
        .map_err(read_err)
}

fn compare<H: HttpGet + ?Sized>(
    http: &H,
    assets_url: &str,
    theme: &Theme,
    local_sticker: &Path,
) -> Result<StickerCheck, UpdateCheckError> {
    let remote = fetch_remote_checksum(http, assets_url, theme)?;
    let local = fetch_local_checksum(local_sticker)?;
    if remote == local.as_str() {
        Ok(StickerCheck::Current)
    } else {
        Ok(StickerCheck::Stale { remote, local })
    }
}

/// Compare remote and local checksums. The remote fetch happens first;
/// when it fails the local file is not read.
pub fn check_sticker<H: HttpGet + ?Sized>(
    http: &H,
    assets_url: &str,
    theme: &Theme,
    local_sticker: &Path,
) -> StickerCheck {
    match compare(http, assets_url, theme, local_sticker) {
        Ok(check) => {
            tracing::debug!(theme = %theme.id, %check, "sticker checked");
            check
        }
        Err(e) => StickerCheck::CheckFailed(e),
    }
}

/// True only when the check completed and the checksums differ. Failures are
/// logged and read as "current" so a broken network never forces a redownload.
pub fn is_sticker_not_current<H: HttpGet + ?Sized>(
    http: &H,
    assets_url: &str,
    theme: &Theme,
    local_sticker: &Path,
) -> bool {
    let check = check_sticker(http, assets_url, theme, local_sticker);
    if let StickerCheck::CheckFailed(e) = &check {
        tracing::warn!("Unable to check for updates: {}", e);
    }
    check.is_stale()
}
