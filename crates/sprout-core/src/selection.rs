//! Selection and description-expansion view state.

use crate::{
    models::{Project, ProjectId},
    view::ProjectView,
};

/// Which project is selected for detail display, and whose description is
/// shown in full. Both are tracked by id, so re-sorting or filtering the
/// view never shifts them onto another record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<ProjectId>,
    expanded: Option<ProjectId>,
}

impl Selection {
    /// Select the project at a zero-based position of `view` and return it.
    /// Out-of-range positions leave the selection untouched.
    pub fn select_at<'v>(&mut self, view: &'v ProjectView, position: usize) -> Option<&'v Project> {
        let project = view.get(position)?;
        self.selected = Some(project.id.clone());
        Some(project)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Expand the description of `id`, or collapse it if it is the one
    /// already expanded. Returns whether `id` is expanded afterwards.
    pub fn toggle_description(&mut self, id: &ProjectId) -> bool {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(id.clone());
            true
        }
    }

    /// Clear every reference to a project that was removed.
    pub fn forget(&mut self, id: &ProjectId) {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        }
    }

    pub fn selected(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    pub fn expanded(&self) -> Option<&ProjectId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &ProjectId) -> bool {
        self.expanded.as_ref() == Some(id)
    }
}
