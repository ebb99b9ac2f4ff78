//! Merge an optional highlighted plant into a ranked result list.

use serde::Serialize;

use crate::core::plant::PlantRecord;
use crate::matching::scoring::{ScoredMatch, DEFAULT_BASE_SCORE};

/// Badge text for the top result when it genuinely matched
pub const BEST_MATCH_LABEL: &str = "Best match";

/// A plant to feature at the top of the results
#[derive(Debug, Clone)]
pub struct Highlight<'a> {
    pub plant: &'a PlantRecord,
    /// Badge text shown on the featured card
    pub label: Option<String>,
    /// Extra reason appended to the card's "why it fits" list
    pub reason: Option<String>,
}

impl<'a> Highlight<'a> {
    #[must_use]
    pub fn new(plant: &'a PlantRecord) -> Self {
        Self {
            plant,
            label: None,
            reason: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Card annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "label")]
pub enum Badge {
    BestMatch,
    Highlight(String),
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BestMatch => f.write_str(BEST_MATCH_LABEL),
            Self::Highlight(label) => f.write_str(label),
        }
    }
}

/// A result ready for display
#[derive(Debug, Clone)]
pub struct ComposedMatch<'a> {
    pub item: ScoredMatch<'a>,
    pub badge: Option<Badge>,
    /// Is this the explicitly highlighted plant?
    pub highlighted: bool,
}

/// Put the highlight (if any) at the front of `ranked` and assign badges.
///
/// `ranked` is expected to be already capped by the matching engine; the
/// highlight is spliced in afterwards without re-capping, so a newly
/// inserted highlight can make the list one longer than the cap.
#[must_use]
pub fn compose<'a>(
    ranked: Vec<ScoredMatch<'a>>,
    highlight: Option<&Highlight<'a>>,
) -> Vec<ComposedMatch<'a>> {
    let mut items = ranked;

    if let Some(highlight) = highlight {
        promote(&mut items, highlight);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let highlighted = highlight.is_some_and(|h| h.plant.id == item.plant.id);
            let badge = if highlighted {
                highlight
                    .and_then(|h| h.label.clone())
                    .map(Badge::Highlight)
            } else if idx == 0 && item.match_score > 0 {
                Some(Badge::BestMatch)
            } else {
                None
            };

            ComposedMatch {
                item,
                badge,
                highlighted,
            }
        })
        .collect()
}

fn promote<'a>(items: &mut Vec<ScoredMatch<'a>>, highlight: &Highlight<'a>) {
    let existing = items
        .iter()
        .position(|m| m.plant.id == highlight.plant.id);

    let promoted = if let Some(idx) = existing {
        let mut item = items.remove(idx);
        if let Some(reason) = &highlight.reason {
            if !item.reasons.contains(reason) {
                item.reasons.push(reason.clone());
            }
        }
        item
    } else {
        ScoredMatch {
            plant: highlight.plant,
            match_score: 0,
            score: highlight.plant.base_score.unwrap_or(DEFAULT_BASE_SCORE) + 1.0,
            reasons: highlight.reason.iter().cloned().collect(),
        }
    };

    items.insert(0, promoted);
}
