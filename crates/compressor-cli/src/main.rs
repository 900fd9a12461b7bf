// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `compressor`: mine a JSON recipe book and query its compressed recipes.
#![allow(clippy::print_stdout)]

mod cli;
mod query;
mod render;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use compressor_config_fs::FsConfigStore;
use compressor_core::{
    CompressionRegistry, ConfigService, ConfigStore, MiningReport, RegistryConfig,
    REGISTRY_CONFIG_KEY,
};
use compressor_recipes::RecipeBook;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = registry_config(&cli);
    debug!(?config, "registry config");

    match cli.command {
        Command::Lookup { book, items } => {
            let queries = items
                .iter()
                .map(|text| query::parse_item(text).map(|stack| (text.clone(), stack)))
                .collect::<Result<Vec<_>>>()?;
            let (book, mut registry, _) = mine(&book, config)?;
            let answers: Vec<_> = queries
                .into_iter()
                .map(|(text, stack)| (text, registry.lookup(&stack)))
                .collect();
            println!("{}", render::lookups(book.names(), &answers));
        }
        Command::Tables { book } => {
            let (book, registry, report) = mine(&book, config)?;
            println!("{}", render::report(&report));
            println!("{}", render::tables(book.names(), registry.tables()));
        }
    }
    Ok(())
}

fn mine(
    path: &Path,
    config: RegistryConfig,
) -> Result<(RecipeBook, CompressionRegistry, MiningReport)> {
    let book = RecipeBook::from_path(path)
        .with_context(|| format!("failed to load recipe book {}", path.display()))?;
    let mut registry = CompressionRegistry::with_config(config);
    let report = registry.reload(book.recipes());
    Ok((book, registry, report))
}

/// Loads the registry config (best-effort) and applies command-line overrides.
fn registry_config(cli: &Cli) -> RegistryConfig {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    let mut registry = match store.map(ConfigService::new) {
        Ok(config) => load_or_persist(&config),
        Err(err) => {
            warn!(%err, "config store unavailable; using defaults");
            RegistryConfig::default()
        }
    };
    if cli.no_fallback {
        registry.degenerate_fallback = false;
    }
    registry
}

/// Reads the stored registry config once, persisting defaults when absent.
fn load_or_persist<S: ConfigStore>(config: &ConfigService<S>) -> RegistryConfig {
    match config.load::<RegistryConfig>(REGISTRY_CONFIG_KEY) {
        Ok(Some(loaded)) => loaded,
        Ok(None) => {
            let defaults = RegistryConfig::default();
            if let Err(err) = config.save(REGISTRY_CONFIG_KEY, &defaults) {
                warn!(%err, "could not persist default registry config");
            }
            defaults
        }
        Err(err) => {
            warn!(%err, "ignoring unreadable registry config");
            RegistryConfig::default()
        }
    }
}
