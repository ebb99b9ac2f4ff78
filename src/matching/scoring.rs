use serde::Serialize;

use crate::core::filters::FilterSet;
use crate::core::plant::PlantRecord;
use crate::core::types::FilterField;
use crate::matching::engine::ScoringWeights;

/// Base score assumed for plants that don't declare one
pub const DEFAULT_BASE_SCORE: f64 = 1.0;

/// Safely convert a match score to f64 for ranking
#[inline]
fn match_to_f64(match_score: u32) -> f64 {
    f64::from(match_score)
}

/// Result of scoring one plant against one filter set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    /// Sum of the weights of every satisfied filter criterion
    pub match_score: u32,

    /// `match_score` plus the plant's base score; the ranking key
    pub score: f64,

    /// One line per satisfied criterion, in field evaluation order
    pub reasons: Vec<String>,
}

impl MatchScore {
    /// Score a plant against the filters using the default weights
    #[must_use]
    pub fn calculate(plant: &PlantRecord, filters: &FilterSet) -> Self {
        Self::calculate_with_weights(plant, filters, &ScoringWeights::default())
    }

    /// Score a plant against the filters with custom weights
    #[must_use]
    pub fn calculate_with_weights(
        plant: &PlantRecord,
        filters: &FilterSet,
        weights: &ScoringWeights,
    ) -> Self {
        let mut match_score: u32 = 0;
        let mut reasons = Vec::new();

        for field in FilterField::ALL {
            let Some(wanted) = filters.get(field).value() else {
                continue;
            };

            if criterion_met(plant, field, wanted) {
                match_score = match_score.saturating_add(weights.weight(field));
                reasons.push(reason_for(field, wanted));
            }
        }

        let score = match_to_f64(match_score) + plant.base_score.unwrap_or(DEFAULT_BASE_SCORE);

        Self {
            match_score,
            score,
            reasons,
        }
    }
}

fn criterion_met(plant: &PlantRecord, field: FilterField, wanted: &str) -> bool {
    match field {
        FilterField::Season => plant.blooms_in(wanted),
        FilterField::Sun => plant.sun == wanted,
        FilterField::Height => plant.height == wanted,
        FilterField::Color => plant.color == wanted,
        FilterField::Focus => plant.has_focus(wanted),
    }
}

fn reason_for(field: FilterField, wanted: &str) -> String {
    match field {
        FilterField::Season => format!("Blooms in {}", wanted.to_lowercase()),
        FilterField::Sun => format!("{wanted} ready"),
        FilterField::Height => format!("{} height layer", wanted.to_lowercase()),
        FilterField::Color => format!("{} palette", wanted.to_lowercase()),
        FilterField::Focus => focus_reason_label(wanted).to_string(),
    }
}

/// Friendly reason text for a focus tag; unknown tags pass through unchanged
#[must_use]
pub fn focus_reason_label(focus: &str) -> &str {
    match focus {
        "Pollinator" => "Pollinator magnet",
        "Drought" => "Handles dry spells",
        "Cut" => "Great for cutting",
        "Fragrant" => "Fragrance friendly",
        other => other,
    }
}

/// A plant paired with its score for the current filters
///
/// Built fresh for every request and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch<'a> {
    pub plant: &'a PlantRecord,
    pub match_score: u32,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl<'a> ScoredMatch<'a> {
    #[must_use]
    pub fn new(plant: &'a PlantRecord, filters: &FilterSet, weights: &ScoringWeights) -> Self {
        let MatchScore {
            match_score,
            score,
            reasons,
        } = MatchScore::calculate_with_weights(plant, filters, weights);

        Self {
            plant,
            match_score,
            score,
            reasons,
        }
    }

    /// Wrap a plant without scoring it against any filter
    #[must_use]
    pub fn unscored(plant: &'a PlantRecord) -> Self {
        Self {
            plant,
            match_score: 0,
            score: plant.base_score.unwrap_or(DEFAULT_BASE_SCORE),
            reasons: Vec::new(),
        }
    }

    #[must_use]
    pub fn strength(&self) -> Option<MatchStrength> {
        MatchStrength::from_match_score(self.match_score)
    }
}

/// How strongly a plant fits the filters, shown on result cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    WorthExploring,
    Solid,
    Strong,
    Standout,
}

impl MatchStrength {
    /// Tier for a match score; below 2 no strength line is shown
    #[must_use]
    pub fn from_match_score(match_score: u32) -> Option<Self> {
        if match_score >= 11 {
            Some(Self::Standout)
        } else if match_score >= 7 {
            Some(Self::Strong)
        } else if match_score >= 4 {
            Some(Self::Solid)
        } else if match_score >= 2 {
            Some(Self::WorthExploring)
        } else {
            None
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standout => "standout",
            Self::Strong => "strong",
            Self::Solid => "solid",
            Self::WorthExploring => "worth exploring",
        }
    }
}

impl std::fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match strength: {}", self.label())
    }
}
