//! Catalog validation applied when plants are loaded.

use std::collections::HashSet;

use thiserror::Error;

use crate::core::plant::PlantRecord;

/// Problems that make a catalog unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate plant id '{0}'")]
    DuplicateId(String),

    #[error("Plant '{0}' has no bloom seasons")]
    EmptyBloom(String),

    #[error("Plant '{id}' has an empty '{field}' field")]
    EmptyField { id: String, field: &'static str },
}

/// Validate a single plant record.
///
/// # Examples
///
/// ```
/// use plant_finder::core::PlantRecord;
/// use plant_finder::utils::validation::validate_plant;
///
/// let plant = PlantRecord::new("aster", "Aster", "Full", "Tall", "Purple").with_bloom(["Fall"]);
/// assert!(validate_plant(&plant).is_ok());
///
/// let no_bloom = PlantRecord::new("aster", "Aster", "Full", "Tall", "Purple");
/// assert!(validate_plant(&no_bloom).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the id, name or a categorical field is blank, or
/// the plant blooms in no season.
pub fn validate_plant(plant: &PlantRecord) -> Result<(), ValidationError> {
    let id = plant.id.as_str();
    let required = [
        ("id", id),
        ("name", plant.name.as_str()),
        ("sun", plant.sun.as_str()),
        ("height", plant.height.as_str()),
        ("color", plant.color.as_str()),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                id: id.to_string(),
                field,
            });
        }
    }

    if plant.bloom.is_empty() {
        return Err(ValidationError::EmptyBloom(id.to_string()));
    }

    Ok(())
}

/// Validate a whole catalog: every plant individually, plus id uniqueness.
///
/// # Errors
///
/// Returns the first problem found, in catalog order.
pub fn validate_plants(plants: &[PlantRecord]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(plants.len());
    for plant in plants {
        validate_plant(plant)?;
        if !seen.insert(plant.id.as_str()) {
            return Err(ValidationError::DuplicateId(plant.id.to_string()));
        }
    }
    Ok(())
}
