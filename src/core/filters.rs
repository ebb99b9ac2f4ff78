use serde::{Deserialize, Serialize};

use crate::core::types::FilterField;

/// Discover sentinel meaning "no constraint"
pub const ANY: &str = "Any";

/// Library sentinel meaning "no constraint"
pub const ALL: &str = "All";

/// A single filter selection: either unconstrained or one concrete value
///
/// Converting from a string maps exactly `"Any"` to [`FilterValue::Any`];
/// every other string, including `"any"`, `"All"` and padded values, is kept
/// verbatim as a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    Any,
    Only(String),
}

impl FilterValue {
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The concrete value, if constrained
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Parse `s`, treating exactly `sentinel` as unconstrained
    #[must_use]
    pub fn with_sentinel(s: &str, sentinel: &str) -> Self {
        if s == sentinel {
            Self::Any
        } else {
            Self::Only(s.to_string())
        }
    }

    /// Does `candidate` satisfy this filter?
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(v) => v == candidate,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::with_sentinel(s, ANY)
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Option<String>> for FilterValue {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Any, Self::from)
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Any => ANY.to_string(),
            FilterValue::Only(v) => v,
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "{ANY}"),
            Self::Only(v) => write!(f, "{v}"),
        }
    }
}

/// The five discover filters, each independently "Any" or a concrete value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default)]
    pub season: FilterValue,
    #[serde(default)]
    pub sun: FilterValue,
    #[serde(default)]
    pub height: FilterValue,
    #[serde(default)]
    pub color: FilterValue,
    #[serde(default)]
    pub focus: FilterValue,
}

impl FilterSet {
    /// Filter set with every field unconstrained
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Set one field, builder style
    #[must_use]
    pub fn with(mut self, field: FilterField, value: impl Into<FilterValue>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    #[must_use]
    pub fn get(&self, field: FilterField) -> &FilterValue {
        match field {
            FilterField::Season => &self.season,
            FilterField::Sun => &self.sun,
            FilterField::Height => &self.height,
            FilterField::Color => &self.color,
            FilterField::Focus => &self.focus,
        }
    }

    fn get_mut(&mut self, field: FilterField) -> &mut FilterValue {
        match field {
            FilterField::Season => &mut self.season,
            FilterField::Sun => &mut self.sun,
            FilterField::Height => &mut self.height,
            FilterField::Color => &mut self.color,
            FilterField::Focus => &mut self.focus,
        }
    }

    /// True when the user applied no filters at all
    #[must_use]
    pub fn all_open(&self) -> bool {
        FilterField::ALL.iter().all(|&f| self.get(f).is_any())
    }
}
