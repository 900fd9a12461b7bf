// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mine compressed recipes out of a JSON recipe book and query them.
#[derive(Debug, Parser)]
#[command(name = "compressor", version, about)]
pub(crate) struct Cli {
    /// Skip the 2×2-in-3×3 retry for 9-cell rules.
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Read and persist config here instead of the platform config dir.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Look up the compressed recipe for each item.
    Lookup {
        /// Recipe book to mine.
        #[arg(long, value_name = "FILE")]
        book: PathBuf,
        /// Items as `label`, `label@variant` or `label@*`.
        #[arg(required = true, value_name = "ITEM")]
        items: Vec<String>,
    },
    /// Print the mined small and large tables.
    Tables {
        /// Recipe book to mine.
        #[arg(long, value_name = "FILE")]
        book: PathBuf,
    },
}
