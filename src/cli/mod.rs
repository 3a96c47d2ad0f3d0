// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bible-ranges command-line interface.
//!
//! Two subcommands: `score` ranks a JSON file of documents against a query,
//! and `inspect` decodes a stored range field so you can see what the scorer
//! sees. Both read the same optional JSON config the library uses.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bible-ranges",
    about = "Rank documents by scripture-reference proximity",
    version
)]
pub struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank documents against a query
    Score {
        /// Query ranges, written in the stored field format
        /// (e.g. "01001001-01003005,40005001-40007029")
        #[arg(short, long)]
        query: String,

        /// JSON array of documents: [{"id": 0, "bible_ranges": "..."}]
        ///
        /// The range field name comes from the config. Documents without the
        /// field score as not relevant; a malformed field aborts the run.
        #[arg(short, long)]
        docs: String,

        /// Path to a JSON scoring config
        #[arg(short, long)]
        config: Option<String>,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Decode a stored range field and show its ranges
    Inspect {
        /// Stored field text
        field: String,

        /// Path to a JSON scoring config
        #[arg(short, long)]
        config: Option<String>,
    },
}
