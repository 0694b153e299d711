pub mod config;
pub mod logging;

pub mod checksum;
pub mod context;
pub mod http;
pub mod installer;
pub mod staleness;
pub mod sticker_path;
pub mod theme;
pub mod update;

pub use context::StickerContext;
pub use staleness::{StickerCheck, StickerUpdateStatus, UpdateCheckError};
pub use theme::{Sticker, Theme, ThemeCatalog};
