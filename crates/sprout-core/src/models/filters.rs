//! View parameters: search, plant-type filter and sort key.

use std::str::FromStr;

use super::PlantType;

/// Sort keys for the derived view. All sorts are ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Locale-aware order by project name
    #[default]
    Name,
    /// Chronological order by start date
    Date,
    /// Locale-aware order by plant-type label
    PlantType,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Date => "date",
            SortKey::PlantType => "plantType",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(SortKey::Name),
            "date" | "startdate" => Ok(SortKey::Date),
            "planttype" | "type" => Ok(SortKey::PlantType),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

/// Inputs of the view deriver. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    /// Case-insensitive substring matched against name and description.
    /// Empty means no search filtering.
    pub search_term: String,

    /// Exact plant-type match, if set
    pub plant_type: Option<PlantType>,

    pub sort_key: SortKey,
}

impl ViewParams {
    /// Parameters with every field set at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sprout_core::models::{PlantType, SortKey, ViewParams};
    ///
    /// let params = ViewParams::new("mint", Some(PlantType::Hortela), SortKey::Date);
    /// assert_eq!(params.search_term, "mint");
    /// assert_eq!(params.sort_key, SortKey::Date);
    /// ```
    pub fn new(search_term: impl Into<String>, plant_type: Option<PlantType>, sort_key: SortKey) -> Self {
        Self {
            search_term: search_term.into(),
            plant_type,
            sort_key,
        }
    }
}
