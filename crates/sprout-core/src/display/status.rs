//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::{error::SproutError, manager::Snapshot};

/// Wrapper type for displaying one-line success or failure messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&SproutError> for OperationStatus {
    fn from(error: &SproutError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

/// Summary of the interactive session: view parameters, counts, selection
/// and the draft being edited.
pub struct SessionStatus<'a>(pub &'a Snapshot);

impl fmt::Display for SessionStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let params = &snapshot.params;

        writeln!(f, "## Session")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Showing: {} of {} projects",
            snapshot.view.len(),
            snapshot.total
        )?;
        if !params.search_term.is_empty() {
            writeln!(f, "- Search: {}", params.search_term)?;
        }
        if let Some(plant) = params.plant_type {
            writeln!(f, "- Plant type: {plant}")?;
        }
        writeln!(f, "- Sort: {}", params.sort_key)?;
        if let Some(id) = snapshot.selection.selected() {
            writeln!(f, "- Selected: {id}")?;
        }
        if let Some(id) = snapshot.selection.expanded() {
            writeln!(f, "- Expanded: {id}")?;
        }
        writeln!(f, "- Mode: {}", snapshot.editor)?;

        if let Some(draft) = snapshot.editor.draft() {
            writeln!(f)?;
            writeln!(f, "### Draft")?;
            writeln!(f)?;
            write!(f, "{draft}")?;
        }

        Ok(())
    }
}
