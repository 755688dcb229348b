// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitescout command-line interface.
//!
//! Every subcommand runs against one catalog (the built-in NEONPAY site, or
//! `--catalog <file>`) in one language (`--lang`, or `SITESCOUT_LANG`, or the
//! configured default). `--json` swaps the boxed terminal output for the same
//! JSON shapes the browser build returns.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitescout",
    about = "Multilingual keyword search for small documentation sites",
    version
)]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in NEONPAY catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Engine config JSON file (limits and default language)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language code to search in
    #[arg(short, long, global = true, env = "SITESCOUT_LANG")]
    pub lang: Option<String>,

    /// Print machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked results
    Search {
        /// Search query
        query: String,

        /// Show the per-signal score of every document
        #[arg(long)]
        explain: bool,
    },

    /// Show the suggestion list for a query
    Suggest {
        /// Query (empty shows the default suggestions)
        #[arg(default_value = "")]
        query: String,
    },

    /// Show autocomplete entries for partially typed input
    Complete {
        /// Partial input
        query: String,
    },

    /// List category labels for the active language
    Categories,

    /// List languages that have a catalog
    Languages,

    /// Summarize the catalog and report validation issues
    Inspect,

    /// Print the loaded catalog as JSON
    Export,
}
