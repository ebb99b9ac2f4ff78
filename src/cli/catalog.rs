use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::{Facets, PlantCatalog};
use crate::cli::render::{library_card, print_cards};
use crate::cli::{CatalogSource, OutputFormat};
use crate::core::plant::format_seasons;
use crate::core::types::PlantId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all plants in the catalog
    List {
        #[command(flatten)]
        source: CatalogSource,
    },

    /// Show details of a specific plant
    Show {
        /// Plant ID
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        source: CatalogSource,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        source: CatalogSource,
    },

    /// List the option values available for each filter
    Facets {
        #[command(flatten)]
        source: CatalogSource,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the plant is unknown,
/// or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { source } => {
            let catalog = source.load()?;
            list_plants(&catalog, format)
        }
        CatalogCommands::Show { id, source } => {
            let catalog = source.load()?;
            show_plant(&catalog, &id, format)
        }
        CatalogCommands::Export { output, source } => {
            let catalog = source.load()?;
            let json = catalog.to_json()?;
            std::fs::write(&output, json)?;
            if verbose {
                eprintln!(
                    "Exported {} plants to {}",
                    catalog.len(),
                    output.display()
                );
            }
            Ok(())
        }
        CatalogCommands::Facets { source } => {
            let catalog = source.load()?;
            print_facets(&catalog.facets(), format)
        }
    }
}

fn list_plants(catalog: &PlantCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Plant Catalog ({} plants)", catalog.len());
            println!("{}", "=".repeat(60));
            for plant in catalog.plants() {
                println!("{:<24} {}", plant.id.as_str(), plant.name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.plants())?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tsun\tbloom\theight\tcolor");
            for plant in catalog.plants() {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    plant.id,
                    plant.name,
                    plant.sun,
                    format_seasons(&plant.bloom),
                    plant.height,
                    plant.color
                );
            }
        }
    }
    Ok(())
}

fn show_plant(catalog: &PlantCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let plant = catalog
        .get(&PlantId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Plant '{id}' not found in catalog"))?;

    match format {
        OutputFormat::Text => {
            print_cards(&[library_card(plant)]);
            println!("   Botanical name: {}", plant.botanical_name);
            if let Some(base) = plant.base_score {
                println!("   Base score: {base}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(plant)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalue");
            println!("id\t{}", plant.id);
            println!("name\t{}", plant.name);
            println!("botanical_name\t{}", plant.botanical_name);
            println!("sun\t{}", plant.sun);
            println!("bloom\t{}", plant.bloom.join(","));
            println!("height\t{}", plant.height);
            println!("color\t{}", plant.color);
            println!("focus\t{}", plant.focus.join(","));
        }
    }
    Ok(())
}

fn print_facets(facets: &Facets, format: OutputFormat) -> anyhow::Result<()> {
    let rows = [
        ("season", &facets.seasons),
        ("sun", &facets.sun),
        ("height", &facets.heights),
        ("color", &facets.colors),
        ("focus", &facets.focus),
    ];

    match format {
        OutputFormat::Text => {
            for (field, values) in rows {
                println!("{field:<8} Any, {}", values.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(facets)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalues");
            for (field, values) in rows {
                println!("{field}\t{}", values.join(","));
            }
        }
    }
    Ok(())
}
