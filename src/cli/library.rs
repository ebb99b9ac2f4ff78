use clap::Args;

use crate::cli::render::{library_card, print_cards, LIBRARY_EMPTY_MESSAGE};
use crate::cli::{CatalogSource, OutputFormat};
use crate::core::plant::{format_seasons, PlantRecord};
use crate::library::LibraryFilter;

#[derive(Args)]
pub struct LibraryArgs {
    /// Light level; "All" for any
    #[arg(long, default_value = "All")]
    pub sun: String,

    /// Flower color; "All" for any
    #[arg(long, default_value = "All")]
    pub color: String,

    /// Height layer; "All" for any
    #[arg(long, default_value = "All")]
    pub height: String,

    /// Text to search for in names, descriptions, notes and focus tags
    #[arg(short, long, default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Execute library subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LibraryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.source.load()?;
    let filter = LibraryFilter::new(
        args.sun.as_str(),
        args.color.as_str(),
        args.height.as_str(),
        &args.query,
    );

    let plants = filter.apply(&catalog);

    if verbose {
        eprintln!("{} of {} plants match", plants.len(), catalog.len());
    }

    match format {
        OutputFormat::Text => {
            if plants.is_empty() {
                println!("{LIBRARY_EMPTY_MESSAGE}");
            } else {
                let cards: Vec<Vec<String>> = plants.iter().map(|p| library_card(p)).collect();
                print_cards(&cards);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plants)?);
        }
        OutputFormat::Tsv => print_tsv_results(&plants),
    }

    Ok(())
}

fn print_tsv_results(plants: &[&PlantRecord]) {
    println!("id\tname\tbotanical_name\tsun\tbloom\theight\tcolor\tfocus");
    for plant in plants {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            plant.id,
            plant.name,
            plant.botanical_name,
            plant.sun,
            format_seasons(&plant.bloom),
            plant.height,
            plant.color,
            plant.focus.join(","),
        );
    }
}
