use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::render::{
    discover_card, discover_tsv_row, print_cards, DiscoverCardView, DISCOVER_EMPTY_MESSAGE,
    DISCOVER_TSV_HEADER,
};
use crate::cli::{CatalogSource, OutputFormat};
use crate::core::filters::FilterSet;
use crate::matching::compose::{compose, ComposedMatch};
use crate::matching::engine::{Fallback, MatchingEngine};
use crate::matching::spotlight::select_spotlight;

#[derive(Args)]
pub struct DiscoverArgs {
    /// Bloom season (e.g., "Summer"); "Any" for no preference
    #[arg(long, default_value = "Any")]
    pub season: String,

    /// Light level (e.g., "Full", "Part", "Shade")
    #[arg(long, default_value = "Any")]
    pub sun: String,

    /// Height layer (e.g., "Short", "Medium", "Tall")
    #[arg(long, default_value = "Any")]
    pub height: String,

    /// Flower color (e.g., "Purple")
    #[arg(long, default_value = "Any")]
    pub color: String,

    /// Garden focus (e.g., "Pollinator", "Drought", "Cut", "Fragrant")
    #[arg(long, default_value = "Any")]
    pub focus: String,

    /// Feature a random spotlight pick at the top of the results
    #[arg(long)]
    pub surprise: bool,

    /// Seed for the spotlight pick, for reproducible output
    #[arg(long, requires = "surprise")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub source: CatalogSource,
}

impl DiscoverArgs {
    #[must_use]
    pub fn filters(&self) -> FilterSet {
        FilterSet {
            season: self.season.as_str().into(),
            sun: self.sun.as_str().into(),
            height: self.height.as_str().into(),
            color: self.color.as_str().into(),
            focus: self.focus.as_str().into(),
        }
    }
}

/// Execute discover subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DiscoverArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.source.load()?;
    let filters = args.filters();

    if verbose {
        eprintln!("Loaded catalog with {} plants", catalog.len());
    }

    let engine = MatchingEngine::new(&catalog);
    let ranking = engine.rank(&filters);

    if verbose {
        let summary = match ranking.fallback {
            Fallback::Matches => "plants matching your filters",
            Fallback::Browse => "crowd favourites (no filters set)",
            Fallback::Alternatives => "alternatives (nothing matched your filters)",
        };
        eprintln!("Showing {} {summary}", ranking.items.len());
    }

    let spotlight = if args.surprise {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        select_spotlight(&engine, &filters, &mut rng)
    } else {
        None
    };

    if verbose {
        if let Some(spotlight) = &spotlight {
            eprintln!(
                "Spotlight: {} ({})",
                spotlight.pick.plant.name, spotlight.reason
            );
        }
    }

    let highlight = spotlight.as_ref().map(|s| s.highlight());
    let cards = compose(ranking.items, highlight.as_ref());

    match format {
        OutputFormat::Text => print_text_results(&cards),
        OutputFormat::Json => print_json_results(&filters, ranking.fallback, &cards)?,
        OutputFormat::Tsv => print_tsv_results(&cards),
    }

    Ok(())
}

fn print_text_results(cards: &[ComposedMatch<'_>]) {
    if cards.is_empty() {
        println!("{DISCOVER_EMPTY_MESSAGE}");
        return;
    }

    let lines: Vec<Vec<String>> = cards.iter().map(discover_card).collect();
    print_cards(&lines);
}

fn print_json_results(
    filters: &FilterSet,
    fallback: Fallback,
    cards: &[ComposedMatch<'_>],
) -> anyhow::Result<()> {
    let results: Vec<DiscoverCardView<'_>> = cards.iter().map(DiscoverCardView::from).collect();
    let output = serde_json::json!({
        "filters": filters,
        "fallback": fallback,
        "results": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(cards: &[ComposedMatch<'_>]) {
    println!("{DISCOVER_TSV_HEADER}");
    for (i, card) in cards.iter().enumerate() {
        println!("{}", discover_tsv_row(i + 1, card));
    }
}
