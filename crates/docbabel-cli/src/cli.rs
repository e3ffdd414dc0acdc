//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docbabel: translation pipeline for standards codelists and schemas
#[derive(Parser)]
#[command(name = "docbabel")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract translatable text units from a codelist or schema file
    Extract {
        /// Path to the source file (.csv or .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output units as JSON instead of location TAB text lines
        #[arg(long)]
        json: bool,
    },

    /// Translate configured source sets into target directories
    Translate {
        /// Path to a JSON configuration file: an array of
        /// {"sources": [...], "target": "...", "domain": "..."} objects
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Target language code (e.g. "ru")
        #[arg(short, long)]
        language: String,

        /// Directory holding <language>/<domain>.json catalogs
        #[arg(long, value_name = "DIR")]
        locale_dir: PathBuf,

        /// Language the source documents are written in
        #[arg(long, default_value = "en")]
        source_language: String,

        /// Additional placeholder substitution as name=value (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        substitutions: Vec<String>,
    },
}
