//! # plant-finder
//!
//! A library for browsing a plant catalog and recommending plants that fit a garden.
//!
//! Gardeners usually know a handful of things about the spot they want to fill:
//! when they'd like color, how much sun it gets, how tall plants can be, a
//! palette, and maybe a goal like feeding pollinators. `plant-finder` scores
//! every plant in a fixed catalog against those preferences and always has
//! something to show, even when the filters are too strict.
//!
//! ## Features
//!
//! - **Weighted scoring**: Season, sun, height, color and focus each add points with a reason
//! - **Fallback policy**: Unfiltered browsing, ranked matches, or a short list of alternatives
//! - **Spotlight picks**: A uniformly random featured plant from the current results
//! - **Result composition**: The spotlight is merged into the list without duplicates
//! - **Library search**: Exact trait filters plus substring text search
//!
//! ## Example
//!
//! ```rust,no_run
//! use plant_finder::{FilterSet, MatchingEngine, PlantCatalog};
//! use plant_finder::core::FilterField;
//!
//! // Load the embedded catalog
//! let catalog = PlantCatalog::load_embedded().unwrap();
//!
//! let filters = FilterSet::any()
//!     .with(FilterField::Season, "Summer")
//!     .with(FilterField::Sun, "Full");
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&filters) {
//!     println!("{}: {} ({})", m.plant.name, m.match_score, m.reasons.join(", "));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Plant catalog storage and loading
//! - [`core`]: Plant records and filter types
//! - [`matching`]: Scoring, ranking, spotlight and result composition
//! - [`library`]: Library browsing filters
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod library;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::PlantCatalog;
pub use crate::core::filters::{FilterSet, FilterValue};
pub use crate::core::plant::PlantRecord;
pub use crate::core::types::*;
pub use crate::library::LibraryFilter;
pub use crate::matching::engine::{MatchingEngine, ScoringWeights};
pub use crate::matching::scoring::ScoredMatch;
