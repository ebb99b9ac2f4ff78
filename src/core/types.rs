use serde::{Deserialize, Serialize};

/// Unique identifier for a plant in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub String);

impl PlantId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which filter field a criterion applies to, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Season,
    Sun,
    Height,
    Color,
    Focus,
}

impl FilterField {
    /// All fields, in the order the scorer evaluates them
    pub const ALL: [Self; 5] = [
        Self::Season,
        Self::Sun,
        Self::Height,
        Self::Color,
        Self::Focus,
    ];
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Season => write!(f, "season"),
            Self::Sun => write!(f, "sun"),
            Self::Height => write!(f, "height"),
            Self::Color => write!(f, "color"),
            Self::Focus => write!(f, "focus"),
        }
    }
}
