//! `sticker-sync checksum <file>` – compute the MD5 checksum of a file.

use anyhow::{Context, Result};
use std::path::Path;
use sticker_core::checksum;

/// Compute and print the checksum in `md5sum` layout.
pub async fn run_checksum(path: &Path) -> Result<()> {
    let owned = path.to_path_buf();
    let digest = tokio::task::spawn_blocking(move || checksum::checksum_path(&owned))
        .await
        .context("checksum task join")??;
    println!("{}  {}", digest, path.display());
    Ok(())
}
