//! Collection wrapper types for displaying groups of projects.

use std::{borrow::Cow, fmt};

use super::{datetime::StartDate, models::plant_label};
use crate::{
    models::{PlantType, ProjectId},
    selection::Selection,
    view::ProjectView,
};

/// Descriptions longer than this many characters are cut in listings unless
/// the project is expanded.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Shorten `description` to [`DESCRIPTION_PREVIEW_CHARS`] characters with a
/// trailing `...`, unless `expanded` or already short enough.
///
/// # Examples
///
/// ```rust
/// use sprout_core::display::truncate_description;
///
/// let long = "a".repeat(120);
/// let preview = truncate_description(&long, false);
/// assert_eq!(preview.chars().count(), 103);
/// assert!(preview.ends_with("..."));
/// assert_eq!(truncate_description(&long, true), long);
/// ```
pub fn truncate_description(description: &str, expanded: bool) -> Cow<'_, str> {
    if expanded {
        return Cow::Borrowed(description);
    }
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &description[..cut])),
        None => Cow::Borrowed(description),
    }
}

/// Numbered listing of a derived view.
///
/// Positions are 1-based, matching what `show` and `select` accept. The
/// selected project is marked and the expanded one shows its full
/// description.
pub struct ProjectList<'a> {
    view: &'a ProjectView,
    selected: Option<&'a ProjectId>,
    expanded: Option<&'a ProjectId>,
}

impl<'a> ProjectList<'a> {
    /// Listing with every description truncated and nothing selected.
    pub fn new(view: &'a ProjectView) -> Self {
        Self {
            view,
            selected: None,
            expanded: None,
        }
    }

    /// Listing that reflects the current selection and expansion.
    pub fn with_selection(view: &'a ProjectView, selection: &'a Selection) -> Self {
        Self {
            view,
            selected: selection.selected(),
            expanded: selection.expanded(),
        }
    }
}

impl fmt::Display for ProjectList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.view.is_empty() {
            return writeln!(f, "No projects found.");
        }

        for (i, project) in self.view.iter().enumerate() {
            let marker = if self.selected == Some(&project.id) {
                " (selected)"
            } else {
                ""
            };
            writeln!(f, "## {}. {} (ID: {}){marker}", i + 1, project.name, project.id)?;
            writeln!(f)?;
            writeln!(f, "- **Plant type**: {}", plant_label(project.plant_type))?;
            writeln!(
                f,
                "- **Start date**: {}",
                StartDate(project.start_date.as_ref())
            )?;
            if !project.description.is_empty() {
                let expanded = self.expanded == Some(&project.id);
                writeln!(
                    f,
                    "- **Description**: {}",
                    truncate_description(&project.description, expanded)
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// The plant-type catalogue, one label per line.
pub struct PlantTypes;

impl fmt::Display for PlantTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for plant in PlantType::ALL {
            writeln!(f, "- {plant}")?;
        }
        Ok(())
    }
}
