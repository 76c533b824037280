//! Parameter structures for project manager operations.
//!
//! These structures carry the input of one-shot operations across interface
//! boundaries without framework-specific derives. Interface layers (the CLI
//! with clap, or any future one) define their own argument types and convert
//! into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│ ProjectManager  │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;

use crate::models::{Draft, PlantType, ProjectId, SortKey, ViewParams};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Id {
    /// The ID of the project to operate on
    pub id: ProjectId,
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProjects {
    /// Case-insensitive keyword matched against name and description
    pub search: Option<String>,
    /// Only show projects growing this plant type
    pub plant_type: Option<PlantType>,
    /// Sort key, name by default
    pub sort: SortKey,
    /// Show this project's description in full
    pub expand: Option<ProjectId>,
}

impl From<&ListProjects> for ViewParams {
    fn from(params: &ListProjects) -> Self {
        ViewParams {
            search_term: params.search.clone().unwrap_or_default(),
            plant_type: params.plant_type,
            sort_key: params.sort,
        }
    }
}

/// Parameters for creating a new project.
///
/// Required fields are optional here on purpose: a missing one is reported
/// by draft validation together with any other missing field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub plant_type: Option<PlantType>,
    pub start_date: Option<Date>,
}

impl From<&CreateProject> for Draft {
    fn from(params: &CreateProject) -> Self {
        Draft {
            name: params.name.trim().to_string(),
            description: params.description.clone().unwrap_or_default(),
            plant_type: params.plant_type,
            start_date: params.start_date,
        }
    }
}

/// Parameters for editing an existing project. Unset fields keep their
/// current value.
#[derive(Debug, Clone, PartialEq)]
pub struct EditProject {
    pub id: ProjectId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub plant_type: Option<PlantType>,
    pub start_date: Option<Date>,
}

impl EditProject {
    /// Overlay the provided fields on a draft seeded from the project.
    pub fn apply_to(&self, draft: &mut Draft) {
        if let Some(name) = &self.name {
            draft.name = name.trim().to_string();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(plant_type) = self.plant_type {
            draft.plant_type = Some(plant_type);
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = Some(start_date);
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.plant_type.is_none()
            && self.start_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_list_projects_into_view_params() {
        let params = ListProjects {
            search: Some("mint".to_string()),
            plant_type: Some(PlantType::Hortela),
            sort: SortKey::Date,
            expand: None,
        };
        let view: ViewParams = (&params).into();
        assert_eq!(view, ViewParams::new("mint", Some(PlantType::Hortela), SortKey::Date));
        assert_eq!(ViewParams::from(&ListProjects::default()), ViewParams::default());
    }

    #[test]
    fn test_edit_project_overlays_only_set_fields() {
        let mut draft = Draft {
            name: "Horta".to_string(),
            description: "Antiga".to_string(),
            plant_type: Some(PlantType::Tomate),
            start_date: Some(date(2023, 1, 1)),
        };
        let edit = EditProject {
            id: ProjectId::from("p1"),
            name: None,
            description: Some("Nova".to_string()),
            plant_type: Some(PlantType::Alface),
            start_date: None,
        };
        assert!(!edit.is_empty());
        edit.apply_to(&mut draft);
        assert_eq!(draft.name, "Horta");
        assert_eq!(draft.description, "Nova");
        assert_eq!(draft.plant_type, Some(PlantType::Alface));
        assert_eq!(draft.start_date, Some(date(2023, 1, 1)));
    }
}
