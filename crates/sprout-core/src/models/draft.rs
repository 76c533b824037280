//! Draft model: the unsaved working copy edited in the editor session.

use std::{fmt, str::FromStr};

use jiff::civil::Date;

use super::{project::parse_date, PlantType, Project, ProjectFields};
use crate::error::{Result, SproutError};

/// Editable project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    PlantType,
    StartDate,
}

impl DraftField {
    /// Fields that must be non-empty before a draft may be submitted, in the
    /// order they are reported.
    pub const REQUIRED: [DraftField; 3] =
        [DraftField::Name, DraftField::PlantType, DraftField::StartDate];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::PlantType => "plantType",
            DraftField::StartDate => "startDate",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(DraftField::Name),
            "description" => Ok(DraftField::Description),
            "planttype" | "plant" | "type" => Ok(DraftField::PlantType),
            "startdate" | "date" => Ok(DraftField::StartDate),
            _ => Err(format!("Invalid field: {s}")),
        }
    }
}

/// Mutable working copy of a project's fields during create or edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub plant_type: Option<PlantType>,
    pub start_date: Option<Date>,
}

impl Draft {
    /// True when no field has been filled in.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.plant_type.is_none()
            && self.start_date.is_none()
    }

    /// Set one field from user text. An empty value clears the field.
    ///
    /// # Errors
    ///
    /// * `SproutError::InvalidInput` - unknown plant type or malformed date
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        let value = value.trim();
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::PlantType => {
                self.plant_type = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|reason: String| {
                        SproutError::invalid_input(field.as_str()).with_reason(reason)
                    })?)
                };
            }
            DraftField::StartDate => {
                self.start_date = if value.is_empty() {
                    None
                } else {
                    Some(parse_date(value).map_err(|reason| {
                        SproutError::invalid_input(field.as_str()).with_reason(reason)
                    })?)
                };
            }
        }
        Ok(())
    }

    /// Required fields that are still empty, in reporting order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|field| match field {
                DraftField::Name => self.name.trim().is_empty(),
                DraftField::PlantType => self.plant_type.is_none(),
                DraftField::StartDate => self.start_date.is_none(),
                DraftField::Description => false,
            })
            .collect()
    }

    /// Check required fields and produce the payload for the remote store.
    ///
    /// # Errors
    ///
    /// * `SproutError::MissingFields` - naming every empty required field
    pub fn validate(&self) -> Result<ProjectFields> {
        match (self.plant_type, self.start_date) {
            (Some(plant_type), Some(start_date)) if !self.name.trim().is_empty() => {
                Ok(ProjectFields {
                    name: self.name.trim().to_string(),
                    description: self.description.clone(),
                    plant_type,
                    start_date,
                })
            }
            _ => Err(SproutError::MissingFields {
                fields: self.missing_fields(),
            }),
        }
    }
}

impl From<&Project> for Draft {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            plant_type: project.plant_type,
            start_date: project.start_date,
        }
    }
}

impl From<ProjectFields> for Draft {
    fn from(fields: ProjectFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            plant_type: Some(fields.plant_type),
            start_date: Some(fields.start_date),
        }
    }
}
