//! Canonical in-memory collection of projects.
//!
//! The collection is the single source of truth for what the remote store
//! holds. Its order is the order records arrived in (fetch order, then
//! creation order) and is never changed by updates; sorting is a view
//! concern handled by [`crate::view`].
//!
//! Only four operations mutate it: [`Collection::replace_all`],
//! [`Collection::append`], [`Collection::apply_update`] and
//! [`Collection::remove`]. Each one completes before returning, so callers
//! never observe a partially applied change.

use log::warn;

use crate::{
    error::{Result, SproutError},
    models::{Project, ProjectFields, ProjectId},
};

/// Ordered set of projects with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    projects: Vec<Project>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh fetch from the store.
    ///
    /// Later records repeating an id already seen are dropped, keeping the
    /// first occurrence.
    pub fn replace_all(&mut self, records: Vec<Project>) {
        let mut projects: Vec<Project> = Vec::with_capacity(records.len());
        for record in records {
            if projects.iter().any(|kept| kept.id == record.id) {
                warn!("Dropping duplicate project ID {} from store listing", record.id);
                continue;
            }
            projects.push(record);
        }
        self.projects = projects;
    }

    /// Add a freshly created project at the end.
    ///
    /// # Errors
    ///
    /// * `SproutError::DuplicateId` - a project with the same id is present
    pub fn append(&mut self, project: Project) -> Result<()> {
        if self.contains(&project.id) {
            return Err(SproutError::DuplicateId { id: project.id });
        }
        self.projects.push(project);
        Ok(())
    }

    /// Overwrite the fields of the project with `id`, keeping its position
    /// and identity. Returns false, changing nothing, if `id` is absent.
    pub fn apply_update(&mut self, id: &ProjectId, fields: ProjectFields) -> bool {
        match self.projects.iter_mut().find(|project| &project.id == id) {
            Some(project) => {
                project.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Remove the project with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &ProjectId) -> Option<Project> {
        let index = self.projects.iter().position(|project| &project.id == id)?;
        Some(self.projects.remove(index))
    }

    /// Look up a project by id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterate in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Borrow the projects in collection order.
    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
