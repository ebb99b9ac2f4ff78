use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::plant::PlantRecord;
use crate::core::types::PlantId;
use crate::utils::validation::{validate_plants, ValidationError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default)]
    pub created_at: String,
    pub plants: Vec<PlantRecord>,
}

/// Distinct option values offered by the catalog, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub seasons: Vec<String>,
    pub sun: Vec<String>,
    pub heights: Vec<String>,
    pub colors: Vec<String>,
    pub focus: Vec<String>,
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// The plant catalog, immutable once loaded
#[derive(Debug, Default)]
pub struct PlantCatalog {
    /// All plants in display order
    plants: Vec<PlantRecord>,

    /// Index: plant ID -> index in plants vec
    id_to_index: HashMap<PlantId, usize>,
}

impl PlantCatalog {
    /// Build a catalog from plants, rejecting duplicate ids and malformed records
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] if any plant fails validation.
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self, CatalogError> {
        validate_plants(&plants)?;

        let id_to_index = plants
            .iter()
            .enumerate()
            .map(|(idx, plant)| (plant.id.clone(), idx))
            .collect();

        Ok(Self {
            plants,
            id_to_index,
        })
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON cannot be parsed or validated.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/plants.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a plant fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let catalog = Self::new(data.plants)?;
        tracing::debug!("Loaded catalog with {} plants", catalog.len());
        Ok(catalog)
    }

    /// All plants, in catalog order
    #[must_use]
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Get a plant by ID
    #[must_use]
    pub fn get(&self, id: &PlantId) -> Option<&PlantRecord> {
        self.id_to_index.get(id).map(|&idx| &self.plants[idx])
    }

    /// Collect the option values each filter control can offer
    #[must_use]
    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        for plant in &self.plants {
            for season in &plant.bloom {
                push_unique(&mut facets.seasons, season);
            }
            push_unique(&mut facets.sun, &plant.sun);
            push_unique(&mut facets.heights, &plant.height);
            push_unique(&mut facets.colors, &plant.color);
            for tag in &plant.focus {
                push_unique(&mut facets.focus, tag);
            }
        }
        facets
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            plants: self.plants.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of plants in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = PlantCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = PlantCatalog::load_embedded().unwrap();

        let coneflower = catalog.get(&PlantId::new("purple-coneflower"));
        assert!(coneflower.is_some());
        let coneflower = coneflower.unwrap();
        assert_eq!(coneflower.name, "Purple Coneflower");
        assert_eq!(coneflower.botanical_name, "Echinacea purpurea");
        assert!(!coneflower.bloom.is_empty());
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = PlantCatalog::load_embedded().unwrap();
        assert!(catalog.get(&PlantId::new("plastic-fern")).is_none());
    }

    #[test]
    fn test_catalog_to_json_round_trips() {
        let catalog = PlantCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"plants\""));
        assert!(json.contains("purple-coneflower"));

        let reloaded = PlantCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.plants(), catalog.plants());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "version": "1.0.0",
            "plants": [
                {"id": "a", "name": "A", "botanicalName": "", "description": "",
                 "sun": "Full", "bloom": ["Summer"], "height": "Tall", "color": "Red"},
                {"id": "a", "name": "B", "botanicalName": "", "description": "",
                 "sun": "Part", "bloom": ["Spring"], "height": "Short", "color": "Blue"}
            ]
        }"#;
        let result = PlantCatalog::from_json(json);
        assert!(matches!(
            result,
            Err(CatalogError::Invalid(ValidationError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let result = PlantCatalog::from_json("{\"plants\": ");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = PlantCatalog::from_json(r#"{"version": "1.0.0", "plants": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.facets(), Facets::default());
    }

    #[test]
    fn test_facets_first_seen_order() {
        let plants = vec![
            PlantRecord::new("a", "A", "Full", "Tall", "Red")
                .with_bloom(["Summer", "Fall"])
                .with_focus(["Pollinator"]),
            PlantRecord::new("b", "B", "Shade", "Short", "Red")
                .with_bloom(["Spring", "Summer"])
                .with_focus(["Cut", "Pollinator"]),
        ];
        let catalog = PlantCatalog::new(plants).unwrap();
        let facets = catalog.facets();

        assert_eq!(facets.seasons, vec!["Summer", "Fall", "Spring"]);
        assert_eq!(facets.sun, vec!["Full", "Shade"]);
        assert_eq!(facets.heights, vec!["Tall", "Short"]);
        assert_eq!(facets.colors, vec!["Red"]);
        assert_eq!(facets.focus, vec!["Pollinator", "Cut"]);
    }
}
