//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update and delete operations with a one-line message followed by the
//! affected project.

use std::fmt;

use crate::{
    manager::SubmitOutcome,
    models::{Project, ProjectId},
};

/// Wrapper type for displaying the result of a create.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created project with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of an update.
///
/// Changes are listed when the caller knows what was modified, e.g. the
/// fields passed to a one-shot edit.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{
///     display::UpdateResult,
///     models::{PlantType, Project, ProjectFields, ProjectId},
/// };
///
/// let project = Project::new(
///     ProjectId::from("3"),
///     ProjectFields {
///         name: "Horta Sul".to_string(),
///         description: "Nova descrição".to_string(),
///         plant_type: PlantType::Cenoura,
///         start_date: date(2024, 2, 1),
///     },
/// );
/// let result = UpdateResult::with_changes(project, vec!["description".to_string()]);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated project with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult {
    pub id: ProjectId,
    pub name: Option<String>,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(id: ProjectId) -> Self {
        Self { id, name: None }
    }

    /// Create a DeleteResult with the project name for better context.
    pub fn with_name(id: ProjectId, name: String) -> Self {
        Self {
            id,
            name: Some(name),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "Deleted project '{name}' (ID: {})", self.id),
            None => writeln!(f, "Deleted project with ID: {}", self.id),
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Created(project) => {
                write!(f, "{}", CreateResult::new(project.clone()))
            }
            SubmitOutcome::Updated(project) => {
                write!(f, "{}", UpdateResult::new(project.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{PlantType, ProjectFields};

    fn project() -> Project {
        Project::new(
            ProjectId::from("abc"),
            ProjectFields {
                name: "Horta Leste".to_string(),
                description: String::new(),
                plant_type: PlantType::Pimentao,
                start_date: date(2024, 6, 30),
            },
        )
    }

    #[test]
    fn test_create_and_update_messages() {
        let created = SubmitOutcome::Created(project()).to_string();
        assert!(created.starts_with("Created project with ID: abc\n"));
        assert!(created.contains("# Horta Leste"));

        let updated = SubmitOutcome::Updated(project()).to_string();
        assert!(updated.starts_with("Updated project with ID: abc\n"));
        assert!(!updated.contains("Changes made:"));
    }

    #[test]
    fn test_delete_messages() {
        let id = ProjectId::from("abc");
        assert_eq!(
            DeleteResult::with_name(id.clone(), "Horta Leste".to_string()).to_string(),
            "Deleted project 'Horta Leste' (ID: abc)\n"
        );
        assert_eq!(
            DeleteResult::new(id).to_string(),
            "Deleted project with ID: abc\n"
        );
    }
}
