//! Core data types for plant browsing and recommendation.
//!
//! - [`PlantRecord`]: a plant from the catalog with its categorical traits
//! - [`FilterSet`]: the five discover filters, each "Any" or a concrete value
//! - [`PlantId`], [`FilterField`]: identifiers and field names
//!
//! Categorical values (sun, height, color, seasons, focus tags) are plain
//! strings compared exactly. The catalog defines which options exist.

pub mod filters;
pub mod plant;
pub mod types;

pub use filters::{FilterSet, FilterValue};
pub use plant::PlantRecord;
pub use types::{FilterField, PlantId};
