use serde::{Deserialize, Serialize};

use crate::core::types::PlantId;

/// A plant in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Unique identifier
    pub id: PlantId,

    /// Common name
    pub name: String,

    /// Latin binomial or cultivar name
    pub botanical_name: String,

    pub description: String,

    /// Growing notes shown under the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Light requirement (e.g. "Full", "Part", "Shade")
    pub sun: String,

    /// Seasons in which the plant flowers
    pub bloom: Vec<String>,

    pub height: String,

    pub color: String,

    /// Garden roles such as "Pollinator" or "Drought"
    #[serde(default)]
    pub focus: Vec<String>,

    /// Intrinsic desirability independent of any filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_score: Option<f64>,
}

impl PlantRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sun: impl Into<String>,
        height: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: PlantId::new(id),
            name: name.into(),
            botanical_name: String::new(),
            description: String::new(),
            notes: None,
            sun: sun.into(),
            bloom: Vec::new(),
            height: height.into(),
            color: color.into(),
            focus: Vec::new(),
            base_score: None,
        }
    }

    #[must_use]
    pub fn with_botanical_name(mut self, botanical_name: impl Into<String>) -> Self {
        self.botanical_name = botanical_name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_bloom<S: Into<String>>(mut self, seasons: impl IntoIterator<Item = S>) -> Self {
        self.bloom = seasons.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_focus<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.focus = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.base_score = Some(base_score);
        self
    }

    /// Does the plant flower in the given season?
    #[must_use]
    pub fn blooms_in(&self, season: &str) -> bool {
        self.bloom.iter().any(|s| s == season)
    }

    /// Does the plant carry the given focus tag?
    #[must_use]
    pub fn has_focus(&self, tag: &str) -> bool {
        self.focus.iter().any(|t| t == tag)
    }
}

/// Format bloom seasons for display: "Spring", "Spring & Summer", "Spring, Summer & Fall"
#[must_use]
pub fn format_seasons(seasons: &[String]) -> String {
    match seasons {
        [] => "Unknown".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} & {second}"),
        [head @ .., last] => format!("{} & {last}", head.join(", ")),
    }
}
