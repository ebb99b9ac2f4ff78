//! Turn results into cards for the terminal, JSON, or TSV.

use serde::Serialize;

use crate::core::plant::{format_seasons, PlantRecord};
use crate::matching::compose::ComposedMatch;

/// Shown when discover has nothing at all to offer
pub const DISCOVER_EMPTY_MESSAGE: &str =
    "No strong matches yet. Try expanding a filter or tap \"Surprise me\" for inspiration.";

/// Shown when the library filters exclude every plant
pub const LIBRARY_EMPTY_MESSAGE: &str =
    "No plants match these filters yet. Try adjusting one of your selections.";

const CHIP_SEPARATOR: &str = " · ";

/// Join non-empty chip values into one line, or `None` if nothing is left
#[must_use]
pub fn meta_chips(values: &[String]) -> Option<String> {
    let chips: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .collect();

    if chips.is_empty() {
        None
    } else {
        Some(chips.join(CHIP_SEPARATOR))
    }
}

fn trait_chips(plant: &PlantRecord) -> Vec<String> {
    vec![
        plant.sun.clone(),
        format!("Bloom: {}", format_seasons(&plant.bloom)),
        format!("Height: {}", plant.height),
        format!("Color: {}", plant.color),
    ]
}

/// Text lines for a discover result card
#[must_use]
pub fn discover_card(card: &ComposedMatch<'_>) -> Vec<String> {
    let plant = card.item.plant;
    let mut lines = Vec::new();

    if let Some(badge) = &card.badge {
        lines.push(format!("[{badge}]"));
    }
    lines.push(plant.name.clone());
    lines.push(plant.description.clone());

    if let Some(meta) = meta_chips(&trait_chips(plant)) {
        lines.push(meta);
    }
    if let Some(notes) = &plant.notes {
        lines.push(notes.clone());
    }
    if let Some(strength) = card.item.strength() {
        lines.push(strength.to_string());
    }
    if !card.item.reasons.is_empty() {
        lines.push(format!("Why it fits: {}", card.item.reasons.join(" | ")));
    }

    lines
}

/// Text lines for a library card
#[must_use]
pub fn library_card(plant: &PlantRecord) -> Vec<String> {
    let mut lines = vec![plant.name.clone(), plant.description.clone()];

    let mut chips = trait_chips(plant);
    chips.extend(plant.focus.iter().cloned());
    if let Some(meta) = meta_chips(&chips) {
        lines.push(meta);
    }
    if let Some(notes) = &plant.notes {
        lines.push(notes.clone());
    }

    lines
}

/// Print cards separated by rules, the way every text view does
pub fn print_cards(cards: &[Vec<String>]) {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!("{}", "─".repeat(60));
        }
        for (j, line) in card.iter().enumerate() {
            if j == 0 {
                println!("{line}");
            } else {
                println!("   {line}");
            }
        }
    }
}

/// Display form of a discover result; the internal ranking score is omitted
#[derive(Debug, Serialize)]
pub struct DiscoverCardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub botanical_name: &'a str,
    pub match_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<&'static str>,
    pub reasons: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub highlighted: bool,
}

impl<'a> From<&'a ComposedMatch<'a>> for DiscoverCardView<'a> {
    fn from(card: &'a ComposedMatch<'a>) -> Self {
        Self {
            id: card.item.plant.id.as_str(),
            name: &card.item.plant.name,
            botanical_name: &card.item.plant.botanical_name,
            match_score: card.item.match_score,
            strength: card.item.strength().map(|s| s.label()),
            reasons: &card.item.reasons,
            badge: card.badge.as_ref().map(ToString::to_string),
            highlighted: card.highlighted,
        }
    }
}

/// Header row for discover TSV output
pub const DISCOVER_TSV_HEADER: &str = "rank\tid\tname\tmatch_score\tstrength\tbadge\treasons";

/// One TSV row for a discover result
#[must_use]
pub fn discover_tsv_row(rank: usize, card: &ComposedMatch<'_>) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        rank,
        card.item.plant.id,
        card.item.plant.name,
        card.item.match_score,
        card.item.strength().map_or("", |s| s.label()),
        card.badge.as_ref().map(ToString::to_string).unwrap_or_default(),
        card.item.reasons.join("; "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::FilterSet;
    use crate::core::types::FilterField;
    use crate::matching::compose::{compose, Badge};
    use crate::matching::engine::ScoringWeights;
    use crate::matching::scoring::ScoredMatch;

    fn bee_balm() -> PlantRecord {
        PlantRecord::new("bee-balm", "Bee Balm", "Full", "Tall", "Red")
            .with_description("Shaggy scarlet heads")
            .with_notes("Divide every few years")
            .with_bloom(["Summer", "Fall"])
            .with_focus(["Pollinator", "Fragrant"])
            .with_base_score(2.0)
    }

    #[test]
    fn test_meta_chips_skip_empty() {
        let chips = vec![String::new(), "Full".to_string(), "Color: Red".to_string()];
        assert_eq!(meta_chips(&chips).as_deref(), Some("Full · Color: Red"));
        assert_eq!(meta_chips(&[String::new()]), None);
    }

    #[test]
    fn test_discover_card_lines() {
        let plant = bee_balm();
        let filters = FilterSet::any()
            .with(FilterField::Season, "Summer")
            .with(FilterField::Sun, "Full");
        let ranked = vec![ScoredMatch::new(&plant, &filters, &ScoringWeights::default())];
        let composed = compose(ranked, None);

        let lines = discover_card(&composed[0]);
        assert_eq!(
            lines,
            vec![
                "[Best match]",
                "Bee Balm",
                "Shaggy scarlet heads",
                "Full · Bloom: Summer & Fall · Height: Tall · Color: Red",
                "Divide every few years",
                "Match strength: strong",
                "Why it fits: Blooms in summer | Full ready",
            ]
        );
        assert_eq!(composed[0].badge, Some(Badge::BestMatch));
    }

    #[test]
    fn test_library_card_includes_focus() {
        let lines = library_card(&bee_balm());
        assert_eq!(
            lines[2],
            "Full · Bloom: Summer & Fall · Height: Tall · Color: Red · Pollinator · Fragrant"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_view_omits_internal_score() {
        let plant = bee_balm();
        let composed = compose(vec![ScoredMatch::unscored(&plant)], None);
        let json = serde_json::to_value(DiscoverCardView::from(&composed[0])).unwrap();

        assert_eq!(json["id"], "bee-balm");
        assert_eq!(json["match_score"], 0);
        assert!(json.get("score").is_none());
        assert!(json.get("strength").is_none());
        assert!(json.get("badge").is_none());
    }

    #[test]
    fn test_tsv_row() {
        let plant = bee_balm();
        let filters = FilterSet::any().with(FilterField::Focus, "Pollinator");
        let ranked = vec![ScoredMatch::new(&plant, &filters, &ScoringWeights::default())];
        let composed = compose(ranked, None);

        assert_eq!(
            discover_tsv_row(1, &composed[0]),
            "1\tbee-balm\tBee Balm\t2\tworth exploring\tBest match\tPollinator magnet"
        );
    }
}
