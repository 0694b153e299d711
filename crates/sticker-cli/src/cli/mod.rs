//! CLI for sticker-sync.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sticker_core::config;

use commands::{run_check, run_checksum, run_install, run_path, run_update, Session};

/// Top-level CLI for sticker-sync.
#[derive(Debug, Parser)]
#[command(name = "sticker-sync")]
#[command(about = "Keep cached theme stickers in sync with their published versions", long_about = None)]
pub struct Cli {
    /// Theme catalog (JSON). Overrides `themes_file` from config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub themes: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Report whether a theme's cached sticker is current, stale, or could not be checked.
    Check {
        /// Theme identifier from the catalog.
        theme: String,
    },

    /// Re-download a theme's sticker if the cached copy is stale.
    Update {
        /// Theme identifier from the catalog.
        theme: String,
    },

    /// Download a theme's sticker without checking first.
    Install {
        /// Theme identifier from the catalog.
        theme: String,
    },

    /// Print where a theme's sticker is cached.
    Path {
        /// Theme identifier from the catalog.
        theme: String,
    },

    /// Compute the MD5 checksum of a file, as published in `.checksum.txt`.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        if let Some(themes) = cli.themes {
            cfg.themes_file = Some(themes);
        }

        match cli.command {
            CliCommand::Check { theme } => run_check(&Session::load(&cfg)?, &theme).await?,
            CliCommand::Update { theme } => run_update(&Session::load(&cfg)?, &theme).await?,
            CliCommand::Install { theme } => run_install(&Session::load(&cfg)?, &theme).await?,
            CliCommand::Path { theme } => run_path(&Session::load(&cfg)?, &theme)?,
            CliCommand::Checksum { path } => run_checksum(&path).await?,
        }

        Ok(())
    }
}
