//! Library browsing: exact-match trait filters plus a free-text query.

use crate::catalog::store::PlantCatalog;
use crate::core::filters::{FilterValue, ALL};
use crate::core::plant::PlantRecord;

/// Filters offered by the plant library view
///
/// Trait filters use `"All"` as their unconstrained option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub sun: FilterValue,
    pub color: FilterValue,
    pub height: FilterValue,
    /// Trimmed, lowercased substring searched across the plant's text fields
    query: String,
}

impl LibraryFilter {
    #[must_use]
    pub fn new(sun: &str, color: &str, height: &str, query: &str) -> Self {
        Self {
            sun: FilterValue::with_sentinel(sun, ALL),
            color: FilterValue::with_sentinel(color, ALL),
            height: FilterValue::with_sentinel(height, ALL),
            query: query.trim().to_lowercase(),
        }
    }

    /// The normalized search query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Does the plant pass every filter?
    #[must_use]
    pub fn accepts(&self, plant: &PlantRecord) -> bool {
        self.sun.accepts(&plant.sun)
            && self.color.accepts(&plant.color)
            && self.height.accepts(&plant.height)
            && self.matches_query(plant)
    }

    fn matches_query(&self, plant: &PlantRecord) -> bool {
        self.query.is_empty() || search_text(plant).contains(&self.query)
    }

    /// Plants passing the filters, sorted by name
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a PlantCatalog) -> Vec<&'a PlantRecord> {
        let mut plants: Vec<&PlantRecord> = catalog
            .plants()
            .iter()
            .filter(|plant| self.accepts(plant))
            .collect();

        plants.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(
            "Library filter kept {} of {} plants",
            plants.len(),
            catalog.len()
        );
        plants
    }
}

/// Lowercased text searched by the library query
fn search_text(plant: &PlantRecord) -> String {
    let focus = plant.focus.join(" ");
    [
        plant.name.as_str(),
        plant.botanical_name.as_str(),
        plant.description.as_str(),
        plant.notes.as_deref().unwrap_or_default(),
        focus.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_catalog() -> PlantCatalog {
        PlantCatalog::new(vec![
            PlantRecord::new("yarrow", "yarrow", "Full", "Medium", "White")
                .with_botanical_name("Achillea millefolium")
                .with_description("Flat clusters")
                .with_bloom(["Summer"])
                .with_focus(["Drought"]),
            PlantRecord::new("aster", "Aster", "Full", "Tall", "Purple")
                .with_botanical_name("Symphyotrichum")
                .with_description("Late stars")
                .with_notes("Monarch fuel")
                .with_bloom(["Fall"])
                .with_focus(["Pollinator"]),
            PlantRecord::new("hosta", "Hosta", "Shade", "Short", "White")
                .with_botanical_name("Hosta plantaginea")
                .with_description("Broad leaves")
                .with_bloom(["Summer"]),
        ])
        .unwrap()
    }

    fn names(plants: &[&PlantRecord]) -> Vec<String> {
        plants.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_sorted_by_name() {
        let catalog = make_test_catalog();
        let result = LibraryFilter::default().apply(&catalog);
        assert_eq!(names(&result), vec!["Aster", "Hosta", "yarrow"]);
    }

    #[test]
    fn test_all_sentinel_is_unconstrained() {
        let catalog = make_test_catalog();
        let filter = LibraryFilter::new("All", "All", "All", "");
        assert_eq!(filter.apply(&catalog).len(), 3);
    }

    #[test]
    fn test_trait_filters_combine() {
        let catalog = make_test_catalog();

        let white = LibraryFilter::new("All", "White", "All", "");
        assert_eq!(names(&white.apply(&catalog)), vec!["Hosta", "yarrow"]);

        let white_full = LibraryFilter::new("Full", "White", "All", "");
        assert_eq!(names(&white_full.apply(&catalog)), vec!["yarrow"]);
    }

    #[test]
    fn test_query_searches_all_text_fields() {
        let catalog = make_test_catalog();

        let by_notes = LibraryFilter::new("All", "All", "All", "MONARCH");
        assert_eq!(names(&by_notes.apply(&catalog)), vec!["Aster"]);

        let by_focus = LibraryFilter::new("All", "All", "All", " drought ");
        assert_eq!(names(&by_focus.apply(&catalog)), vec!["yarrow"]);

        let by_botanical = LibraryFilter::new("All", "All", "All", "plantag");
        assert_eq!(names(&by_botanical.apply(&catalog)), vec!["Hosta"]);
    }

    #[test]
    fn test_any_is_not_a_library_sentinel() {
        let catalog = make_test_catalog();
        assert!(LibraryFilter::new("Any", "All", "All", "").apply(&catalog).is_empty());
        assert!(LibraryFilter::new(" Full", "All", "All", "").apply(&catalog).is_empty());
    }

    #[test]
    fn test_query_normalized_once() {
        let filter = LibraryFilter::new("All", "All", "All", "  Monarch ");
        assert_eq!(filter.query(), "monarch");
        assert_eq!(LibraryFilter::default().query(), "");
    }

    #[test]
    fn test_no_results_is_empty() {
        let catalog = make_test_catalog();
        let filter = LibraryFilter::new("Shade", "Purple", "All", "");
        assert!(filter.apply(&catalog).is_empty());
    }
}
