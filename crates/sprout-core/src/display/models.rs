//! Display implementations for domain models.
//!
//! Projects render as markdown with a metadata bullet list followed by the
//! full description. Listings that need truncation or view positions use
//! [`super::ProjectList`] instead.

use std::fmt;

use super::datetime::StartDate;
use crate::{
    editor::EditorSession,
    models::{Draft, DraftField, PlantType, Project, SortKey},
};

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for an optional plant type.
pub(crate) fn plant_label(plant_type: Option<PlantType>) -> &'static str {
    plant_type.map_or("not set", |plant| plant.as_str())
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Plant type: {}", plant_label(self.plant_type))?;
        writeln!(f, "- Start date: {}", StartDate(self.start_date.as_ref()))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self.missing_fields();
        let mark = |field| {
            if missing.contains(&field) {
                " (required)"
            } else {
                ""
            }
        };

        writeln!(f, "- name: {}{}", self.name, mark(DraftField::Name))?;
        writeln!(f, "- description: {}", self.description)?;
        writeln!(
            f,
            "- plantType: {}{}",
            self.plant_type.map_or("", |plant| plant.as_str()),
            mark(DraftField::PlantType)
        )?;
        let start = self
            .start_date
            .map(|date| StartDate(Some(&date)).to_string())
            .unwrap_or_default();
        writeln!(f, "- startDate: {start}{}", mark(DraftField::StartDate))
    }
}

impl fmt::Display for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorSession::Idle => f.write_str("Idle"),
            EditorSession::Creating(_) => f.write_str("Creating a new project"),
            EditorSession::Editing { target, .. } => write!(f, "Editing project {target}"),
        }
    }
}
