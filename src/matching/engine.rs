use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::store::PlantCatalog;
use crate::core::filters::FilterSet;
use crate::core::types::FilterField;
use crate::matching::scoring::ScoredMatch;

/// Default number of results shown for matches or an unfiltered browse
pub const DEFAULT_MATCH_LIMIT: usize = 6;

/// Default number of alternatives shown when filters match nothing
pub const DEFAULT_FALLBACK_LIMIT: usize = 4;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Maximum results when something matched, or when no filter is set
    pub match_limit: usize,
    /// Maximum alternatives when filters were set but nothing matched
    pub fallback_limit: usize,
    /// Per-field weights used by the scorer
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_limit: DEFAULT_MATCH_LIMIT,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

/// Points awarded for each satisfied filter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub season: u32,
    pub sun: u32,
    pub height: u32,
    pub color: u32,
    pub focus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            season: 4,
            sun: 3,
            height: 2,
            color: 2,
            focus: 2,
        }
    }
}

impl ScoringWeights {
    #[must_use]
    pub fn weight(&self, field: FilterField) -> u32 {
        match field {
            FilterField::Season => self.season,
            FilterField::Sun => self.sun,
            FilterField::Height => self.height,
            FilterField::Color => self.color,
            FilterField::Focus => self.focus,
        }
    }
}

/// Which branch of the fallback policy produced a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// At least one plant satisfied at least one filter
    Matches,
    /// No filters were set; the whole catalog ranked by base score
    Browse,
    /// Filters were set but matched nothing; a short list of alternatives
    Alternatives,
}

/// Ranked results together with the policy branch that chose them
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub items: Vec<ScoredMatch<'a>>,
    pub fallback: Fallback,
}

/// Descending by score, then by declared base score.
///
/// The tiebreak treats a missing base score as 0 while the scorer treats it
/// as 1. Both defaults are deliberate and must stay as they are.
fn compare_ranked(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            let a_base = a.plant.base_score.unwrap_or(0.0);
            let b_base = b.plant.base_score.unwrap_or(0.0);
            b_base.partial_cmp(&a_base).unwrap_or(Ordering::Equal)
        })
}

/// The discover matching engine
pub struct MatchingEngine<'a> {
    catalog: &'a PlantCatalog,
    /// Configuration including scoring weights and result limits
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(catalog: &'a PlantCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(catalog: &'a PlantCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a PlantCatalog {
        self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score and sort the whole catalog, without any filtering or limit
    #[must_use]
    pub fn score_all(&self, filters: &FilterSet) -> Vec<ScoredMatch<'a>> {
        let mut scored: Vec<ScoredMatch<'a>> = self
            .catalog
            .plants()
            .iter()
            .map(|plant| ScoredMatch::new(plant, filters, &self.config.scoring_weights))
            .collect();

        // Stable: equal keys keep catalog order
        scored.sort_by(compare_ranked);
        scored
    }

    /// Rank the catalog for the filters and apply the fallback policy
    #[must_use]
    pub fn rank(&self, filters: &FilterSet) -> Ranking<'a> {
        let all_open = filters.all_open();
        let scored = self.score_all(filters);

        let matches: Vec<ScoredMatch<'a>> = scored
            .iter()
            .filter(|m| m.match_score > 0)
            .take(self.config.match_limit)
            .cloned()
            .collect();

        let (items, fallback) = if !matches.is_empty() {
            (matches, Fallback::Matches)
        } else if all_open {
            (truncated(scored, self.config.match_limit), Fallback::Browse)
        } else {
            (
                truncated(scored, self.config.fallback_limit),
                Fallback::Alternatives,
            )
        };

        tracing::debug!(
            "Ranked {} plants: {:?}, showing {}",
            self.catalog.len(),
            fallback,
            items.len()
        );

        Ranking { items, fallback }
    }

    /// Find the plants to show for the filters, best first
    #[must_use]
    pub fn find_matches(&self, filters: &FilterSet) -> Vec<ScoredMatch<'a>> {
        self.rank(filters).items
    }
}

fn truncated<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
