//! Command-line interface for plant-finder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **discover**: Ranked recommendations for season, sun, height, color and focus
//! - **library**: Browse the catalog with trait filters and a text search
//! - **catalog**: List, show, export, or summarize the catalog
//!
//! ## Usage
//!
//! ```text
//! # Summer-blooming pollinator plants for full sun
//! plant-finder discover --season Summer --sun Full --focus Pollinator
//!
//! # Same, with a random spotlight pick featured first
//! plant-finder discover --season Summer --surprise
//!
//! # Reproducible spotlight for scripting
//! plant-finder discover --surprise --seed 7 --format json
//!
//! # Library search
//! plant-finder library --color Pink --query fragrant
//!
//! # Which options can I filter by?
//! plant-finder catalog facets
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::PlantCatalog;

pub mod catalog;
pub mod discover;
pub mod library;
pub mod render;

#[derive(Parser)]
#[command(name = "plant-finder")]
#[command(version)]
#[command(about = "Browse a plant library and get planting recommendations")]
#[command(
    long_about = "plant-finder filters a fixed catalog of garden plants.\n\nThe discover command scores every plant against your season, sun, height, color and focus preferences and shows:\n- Up to 6 ranked matches when anything fits\n- The catalog's crowd favourites when no filter is set\n- 4 alternatives when nothing fits your filters\n- An optional random spotlight pick featured at the top"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend plants that fit your garden
    Discover(discover::DiscoverArgs),

    /// Browse and search the plant library
    Library(library::LibraryArgs),

    /// Inspect the plant catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog if one was given, otherwise the embedded one
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed or validated.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<PlantCatalog> {
    let catalog = match path {
        Some(path) => PlantCatalog::load_from_file(path)?,
        None => PlantCatalog::load_embedded()?,
    };
    Ok(catalog)
}

/// Shared `--catalog` option
#[derive(clap::Args, Clone, Debug, Default)]
pub struct CatalogSource {
    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl CatalogSource {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn load(&self) -> anyhow::Result<PlantCatalog> {
        load_catalog(self.catalog.as_deref())
    }
}
