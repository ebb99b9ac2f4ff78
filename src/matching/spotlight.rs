//! "Surprise me": pick one plant at random to feature.

use rand::Rng;
use serde::Serialize;

use crate::core::filters::FilterSet;
use crate::matching::compose::Highlight;
use crate::matching::engine::MatchingEngine;
use crate::matching::scoring::ScoredMatch;

/// Badge text given to the featured plant
pub const SPOTLIGHT_LABEL: &str = "Spotlight pick";

/// Why the spotlight landed where it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotlightReason {
    /// Drawn from plants that satisfied at least one filter
    FromMatches,
    /// Drawn from a pool with no filter fit
    CrowdPleaser,
}

impl SpotlightReason {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::FromMatches => "Hand-picked from your matches",
            Self::CrowdPleaser => "A versatile crowd-pleaser",
        }
    }
}

impl std::fmt::Display for SpotlightReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// The featured plant and why it was chosen
#[derive(Debug, Clone)]
pub struct Spotlight<'a> {
    pub pick: ScoredMatch<'a>,
    pub reason: SpotlightReason,
}

impl<'a> Spotlight<'a> {
    /// Highlight request for the result composer
    #[must_use]
    pub fn highlight(&self) -> Highlight<'a> {
        Highlight::new(self.pick.plant)
            .with_label(SPOTLIGHT_LABEL)
            .with_reason(self.reason.text())
    }
}

/// Pick a plant uniformly at random from the current results.
///
/// The pool is the engine's ranking for `filters`, including its fallback
/// lists. When that is empty the whole catalog is used instead. Returns
/// `None` only when the catalog has no plants.
pub fn select_spotlight<'a>(
    engine: &MatchingEngine<'a>,
    filters: &FilterSet,
    rng: &mut impl Rng,
) -> Option<Spotlight<'a>> {
    let mut pool = engine.find_matches(filters);
    if pool.is_empty() {
        pool = engine
            .catalog()
            .plants()
            .iter()
            .map(ScoredMatch::unscored)
            .collect();
    }

    if pool.is_empty() {
        return None;
    }

    let pool_size = pool.len();
    let pick = pool.swap_remove(rng.gen_range(0..pool_size));
    let reason = if pick.match_score > 0 {
        SpotlightReason::FromMatches
    } else {
        SpotlightReason::CrowdPleaser
    };

    tracing::debug!(
        "Spotlight picked {} from a pool of {}",
        pick.plant.id,
        pool_size
    );

    Some(Spotlight { pick, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::PlantCatalog;
    use crate::core::plant::PlantRecord;
    use crate::core::types::FilterField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn make_test_catalog() -> PlantCatalog {
        PlantCatalog::new(vec![
            PlantRecord::new("rose", "Rose", "Full", "Medium", "Red")
                .with_bloom(["Summer"])
                .with_base_score(3.0),
            PlantRecord::new("fern", "Fern", "Shade", "Short", "Green")
                .with_bloom(["Spring"])
                .with_base_score(5.0),
            PlantRecord::new("poppy", "Poppy", "Full", "Short", "Red")
                .with_bloom(["Spring"]),
            PlantRecord::new("mum", "Mum", "Part", "Medium", "Yellow")
                .with_bloom(["Fall"])
                .with_base_score(2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_pick_only_from_matches() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any().with(FilterField::Color, "Red");
        let mut rng = rng();

        for _ in 0..50 {
            let spotlight = select_spotlight(&engine, &filters, &mut rng).unwrap();
            assert_eq!(spotlight.pick.plant.color, "Red");
            assert_eq!(spotlight.reason, SpotlightReason::FromMatches);
        }
    }

    #[test]
    fn test_every_match_can_be_picked() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any().with(FilterField::Color, "Red");
        let mut rng = rng();

        let picked: HashSet<String> = (0..200)
            .filter_map(|_| select_spotlight(&engine, &filters, &mut rng))
            .map(|s| s.pick.plant.id.to_string())
            .collect();

        assert_eq!(picked.len(), 2);
        assert!(picked.contains("rose"));
        assert!(picked.contains("poppy"));
    }

    #[test]
    fn test_no_match_fallback_is_crowd_pleaser() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any().with(FilterField::Color, "Blue");
        let mut rng = rng();

        let spotlight = select_spotlight(&engine, &filters, &mut rng).unwrap();
        assert_eq!(spotlight.pick.match_score, 0);
        assert_eq!(spotlight.reason, SpotlightReason::CrowdPleaser);
        assert_eq!(spotlight.reason.to_string(), "A versatile crowd-pleaser");
    }

    fn make_wide_catalog() -> PlantCatalog {
        let plants = (1..=8)
            .map(|i| {
                PlantRecord::new(format!("p{i}"), format!("Plant {i}"), "Full", "Medium", "Red")
                    .with_bloom(["Summer"])
                    .with_base_score(f64::from(i))
            })
            .collect();
        PlantCatalog::new(plants).unwrap()
    }

    fn pool_ids(engine: &MatchingEngine<'_>, filters: &FilterSet) -> HashSet<String> {
        engine
            .find_matches(filters)
            .iter()
            .map(|m| m.plant.id.to_string())
            .collect()
    }

    #[test]
    fn test_no_match_pool_is_the_alternatives() {
        let catalog = make_wide_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any().with(FilterField::Color, "Blue");
        let pool = pool_ids(&engine, &filters);
        assert_eq!(pool.len(), 4);

        let mut picked = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let spotlight = select_spotlight(&engine, &filters, &mut rng).unwrap();
            assert!(pool.contains(spotlight.pick.plant.id.as_str()));
            assert_eq!(spotlight.reason, SpotlightReason::CrowdPleaser);
            picked.insert(spotlight.pick.plant.id.to_string());
        }
        assert!(picked.iter().all(|id| ["p8", "p7", "p6", "p5"].contains(&id.as_str())));
    }

    #[test]
    fn test_browse_pool_is_the_top_six() {
        let catalog = make_wide_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any();
        let pool = pool_ids(&engine, &filters);
        assert_eq!(pool.len(), 6);

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let spotlight = select_spotlight(&engine, &filters, &mut rng).unwrap();
            assert!(pool.contains(spotlight.pick.plant.id.as_str()));
            assert_ne!(spotlight.pick.plant.id.as_str(), "p1");
            assert_ne!(spotlight.pick.plant.id.as_str(), "p2");
            assert_eq!(spotlight.reason, SpotlightReason::CrowdPleaser);
        }
    }

    #[test]
    fn test_same_seed_same_pick() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any();

        let a = select_spotlight(&engine, &filters, &mut rng()).unwrap();
        let b = select_spotlight(&engine, &filters, &mut rng()).unwrap();
        assert_eq!(a.pick.plant.id, b.pick.plant.id);
    }

    #[test]
    fn test_empty_catalog_has_no_spotlight() {
        let catalog = PlantCatalog::default();
        let engine = MatchingEngine::new(&catalog);
        assert!(select_spotlight(&engine, &FilterSet::any(), &mut rng()).is_none());
    }

    #[test]
    fn test_highlight_request() {
        let catalog = make_test_catalog();
        let engine = MatchingEngine::new(&catalog);
        let filters = FilterSet::any().with(FilterField::Sun, "Full");

        let spotlight = select_spotlight(&engine, &filters, &mut rng()).unwrap();
        let highlight = spotlight.highlight();

        assert_eq!(highlight.plant.id, spotlight.pick.plant.id);
        assert_eq!(highlight.label.as_deref(), Some(SPOTLIGHT_LABEL));
        assert_eq!(
            highlight.reason.as_deref(),
            Some("Hand-picked from your matches")
        );
    }
}
