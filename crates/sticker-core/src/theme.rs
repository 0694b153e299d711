//! Theme descriptors and the JSON theme catalog they are loaded from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sticker asset bound to a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Relative asset path as published, possibly with `\` separators.
    pub path: String,
    /// Display name of the sticker file.
    #[serde(default)]
    pub name: String,
}

/// A visual theme and its sticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub sticker: Sticker,
}

/// Themes known to this installation, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    /// Parse a JSON array of themes.
    pub fn from_json(data: &str) -> Result<Self> {
        let themes: Vec<Theme> = serde_json::from_str(data).context("parse theme catalog")?;
        Ok(Self { themes })
    }

    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read theme catalog {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("in {}", path.display()))
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Like `get`, but unknown ids are an error naming the id.
    pub fn require(&self, id: &str) -> Result<&Theme> {
        self.get(id)
            .with_context(|| format!("unknown theme id: {}", id))
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}
