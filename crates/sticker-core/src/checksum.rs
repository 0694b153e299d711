//! Sticker checksums: lowercase hex MD5, matching the `.checksum.txt` files
//! published next to each asset. A staleness signal, not an integrity check.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// MD5 of `data` as lowercase hex.
pub fn checksum_bytes(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// MD5 of a file's contents as lowercase hex. Stickers are small images, so
/// the file is read whole.
pub fn checksum_path(path: &Path) -> Result<String> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(checksum_bytes(&data))
}
