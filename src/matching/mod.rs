//! Discover matching: scoring, ranking, spotlight picks and result composition.
//!
//! - [`MatchScore`]: how well one plant fits one filter set, with reasons
//! - [`MatchingEngine`]: ranks the catalog and applies the fallback policy
//! - [`select_spotlight`]: picks a random plant to feature
//! - [`compose`]: merges a featured plant into the ranked list and assigns badges
//!
//! ## Scoring
//!
//! Each filter that is not "Any" contributes its weight when satisfied:
//!
//! | Field  | Satisfied when            | Weight |
//! |--------|---------------------------|--------|
//! | season | plant blooms in season    | 4      |
//! | sun    | exact sun match           | 3      |
//! | height | exact height match        | 2      |
//! | color  | exact color match         | 2      |
//! | focus  | plant carries the tag     | 2      |
//!
//! The ranking score adds the plant's base score (1 when absent).
//!
//! ## Fallback Policy
//!
//! - Something matched: up to 6 plants with a non-zero match score
//! - No filters set: the top 6 of the catalog by base score
//! - Filters set, nothing matched: the top 4 as alternatives
//!
//! ## Example
//!
//! ```rust,no_run
//! use plant_finder::{FilterSet, MatchingEngine, PlantCatalog};
//! use plant_finder::core::FilterField;
//! use plant_finder::matching::{compose, select_spotlight};
//!
//! let catalog = PlantCatalog::load_embedded().unwrap();
//! let engine = MatchingEngine::new(&catalog);
//! let filters = FilterSet::any()
//!     .with(FilterField::Season, "Summer")
//!     .with(FilterField::Focus, "Pollinator");
//!
//! let spotlight = select_spotlight(&engine, &filters, &mut rand::thread_rng());
//! let highlight = spotlight.as_ref().map(|s| s.highlight());
//! let cards = compose(engine.find_matches(&filters), highlight.as_ref());
//!
//! for card in &cards {
//!     println!("{} ({})", card.item.plant.name, card.item.match_score);
//! }
//! ```

pub mod compose;
pub mod engine;
pub mod scoring;
pub mod spotlight;

pub use compose::{compose, Badge, ComposedMatch, Highlight};
pub use engine::{Fallback, MatchingConfig, MatchingEngine, Ranking, ScoringWeights};
pub use scoring::{MatchScore, MatchStrength, ScoredMatch};
pub use spotlight::{select_spotlight, Spotlight, SpotlightReason};
