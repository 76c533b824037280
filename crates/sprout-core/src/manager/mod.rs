//! High-level project manager API with async support.
//!
//! [`ProjectManager`] owns the collection, the view parameters and derived
//! view, the editor session and the selection, and is the only component
//! that talks to the [`ProjectGateway`]. It is built with
//! [`ManagerBuilder`] and injected into whichever layer handles user actions.
//!
//! All state sits behind one async mutex that is never held across a
//! gateway call. Submitting and deleting follow the same three steps:
//! snapshot what the call needs, await the gateway without the lock, then
//! re-lock and apply the outcome in one step. View parameters can therefore
//! change while a submit is in flight, and two outcomes are applied in the
//! order they arrive.

pub mod builder;


use std::sync::Arc;

pub use builder::ManagerBuilder;
use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::{
    collection::Collection,
    editor::{EditorSession, Submission},
    error::{Result, SproutError},
    gateway::ProjectGateway,
    models::{Draft, DraftField, PlantType, Project, ProjectId, SortKey, ViewParams},
    params::{CreateProject, EditProject, ListProjects},
    selection::Selection,
    view::{derive_view, ProjectView},
};

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new project was stored and appended to the collection
    Created(Project),
    /// An existing project was stored with new fields
    Updated(Project),
}

impl SubmitOutcome {
    pub fn project(&self) -> &Project {
        match self {
            SubmitOutcome::Created(project) | SubmitOutcome::Updated(project) => project,
        }
    }
}

/// Consistent copy of the manager state, taken under a single lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub view: ProjectView,
    pub params: ViewParams,
    pub editor: EditorSession,
    pub selection: Selection,
    /// Number of projects in the collection, before filtering
    pub total: usize,
}

#[derive(Debug, Default)]
struct State {
    collection: Collection,
    params: ViewParams,
    view: ProjectView,
    editor: EditorSession,
    selection: Selection,
}

impl State {
    fn refresh(&mut self) {
        self.view = derive_view(&self.collection, &self.params);
    }

    fn forget(&mut self, id: &ProjectId) {
        self.selection.forget(id);
        self.editor.forget(id);
    }
}

/// Main interface for managing garden projects.
pub struct ProjectManager {
    gateway: Arc<dyn ProjectGateway>,
    state: Mutex<State>,
}

impl ProjectManager {
    /// Creates a manager with an empty collection.
    fn new(gateway: Arc<dyn ProjectGateway>, params: ViewParams) -> Self {
        Self {
            gateway,
            state: Mutex::new(State {
                params,
                ..State::default()
            }),
        }
    }

    /// Seed the collection from the remote store, replacing whatever it held.
    /// Selection and edit references to projects that are gone are cleared.
    /// Returns the number of projects loaded.
    pub async fn load(&self) -> Result<usize> {
        let records = self.gateway.list_all().await?;

        let mut state = self.state.lock().await;
        state.collection.replace_all(records);
        let stale: Vec<ProjectId> = [
            state.selection.selected(),
            state.selection.expanded(),
            state.editor.target(),
        ]
        .into_iter()
        .flatten()
        .filter(|id| !state.collection.contains(id))
        .cloned()
        .collect();
        for id in &stale {
            state.forget(id);
        }
        state.refresh();
        info!("Loaded {} projects", state.collection.len());
        Ok(state.collection.len())
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    /// Current derived view.
    pub async fn view(&self) -> ProjectView {
        self.state.lock().await.view.clone()
    }

    /// Copy of the canonical collection.
    pub async fn collection(&self) -> Collection {
        self.state.lock().await.collection.clone()
    }

    pub async fn params(&self) -> ViewParams {
        self.state.lock().await.params.clone()
    }

    pub async fn editor(&self) -> EditorSession {
        self.state.lock().await.editor.clone()
    }

    pub async fn selection(&self) -> Selection {
        self.state.lock().await.selection.clone()
    }

    /// Everything at once, consistent with itself.
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.state.lock().await;
        Snapshot {
            view: state.view.clone(),
            params: state.params.clone(),
            editor: state.editor.clone(),
            selection: state.selection.clone(),
            total: state.collection.len(),
        }
    }

    // ---------------------------------------------------------------------
    // View parameters
    // ---------------------------------------------------------------------

    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.params.search_term = term.into();
        state.refresh();
    }

    pub async fn set_plant_filter(&self, plant_type: Option<PlantType>) {
        let mut state = self.state.lock().await;
        state.params.plant_type = plant_type;
        state.refresh();
    }

    pub async fn set_sort_key(&self, sort_key: SortKey) {
        let mut state = self.state.lock().await;
        state.params.sort_key = sort_key;
        state.refresh();
    }

    /// Replace all view parameters at once.
    pub async fn set_view_params(&self, params: ViewParams) {
        let mut state = self.state.lock().await;
        state.params = params;
        state.refresh();
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Select the project at a zero-based position of the current view.
    pub async fn select_at(&self, position: usize) -> Option<Project> {
        let mut state = self.state.lock().await;
        let State {
            view, selection, ..
        } = &mut *state;
        selection.select_at(view, position).cloned()
    }

    /// The selected project, if it still exists.
    pub async fn selected(&self) -> Option<Project> {
        let state = self.state.lock().await;
        state
            .selection
            .selected()
            .and_then(|id| state.collection.get(id))
            .cloned()
    }

    /// Expand or collapse the description of `id`. Returns whether it is
    /// expanded afterwards.
    ///
    /// # Errors
    ///
    /// * `SproutError::ProjectNotFound` - `id` is not in the collection
    pub async fn toggle_description(&self, id: &ProjectId) -> Result<bool> {
        let mut state = self.state.lock().await;
        if !state.collection.contains(id) {
            return Err(SproutError::ProjectNotFound { id: id.clone() });
        }
        Ok(state.selection.toggle_description(id))
    }

    // ---------------------------------------------------------------------
    // Editor session
    // ---------------------------------------------------------------------

    /// Start a new project draft (no-op if one is already in progress).
    pub async fn begin_create(&self) {
        self.state.lock().await.editor.begin_create();
    }

    /// Start editing `id`, returning the seeded draft.
    pub async fn begin_edit(&self, id: &ProjectId) -> Result<Draft> {
        let mut state = self.state.lock().await;
        let State {
            collection, editor, ..
        } = &mut *state;
        editor.begin_edit(collection, id)?;
        Ok(editor.draft().cloned().unwrap_or_default())
    }

    /// Update one field of the draft, starting a new draft when idle.
    pub async fn set_field(&self, field: DraftField, value: &str) -> Result<()> {
        self.state.lock().await.editor.set_field(field, value)
    }

    /// Discard the draft. Returns whether there was one.
    pub async fn cancel_edit(&self) -> bool {
        self.state.lock().await.editor.cancel()
    }

    /// Submit the draft to the remote store.
    ///
    /// Validation happens locally first: missing required fields fail with
    /// `MissingFields` and the gateway is never called. A gateway failure
    /// leaves the collection, the session mode and the draft untouched.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let submission = self.state.lock().await.editor.prepare_submit()?;

        match &submission {
            Submission::Create(fields) => {
                debug!("Creating project '{}'", fields.name);
                let id = self.gateway.create(fields).await?;
                let project = Project::new(id, fields.clone());

                let mut state = self.state.lock().await;
                // A reload during the create may already hold the new record.
                if state.collection.contains(&project.id) {
                    warn!("Created project {} was already loaded", project.id);
                    state.collection.apply_update(&project.id, fields.clone());
                } else {
                    state.collection.append(project.clone())?;
                }
                state.editor.finish(&submission);
                state.refresh();
                info!("Created project {} '{}'", project.id, project.name);
                Ok(SubmitOutcome::Created(project))
            }
            Submission::Update { id, fields } => {
                debug!("Updating project {id}");
                self.gateway.update(id, fields).await?;

                let mut state = self.state.lock().await;
                if !state.collection.apply_update(id, fields.clone()) {
                    warn!("Updated project {id} is no longer in the collection");
                }
                state.editor.finish(&submission);
                state.refresh();
                info!("Updated project {id}");
                let project = state
                    .collection
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| Project::new(id.clone(), fields.clone()));
                Ok(SubmitOutcome::Updated(project))
            }
        }
    }

    /// Delete a project on the remote store, then from the collection.
    /// Selection, expansion and an edit of the project are cleared.
    ///
    /// Returns the removed project, or `None` if it was not held locally.
    pub async fn delete(&self, id: &ProjectId) -> Result<Option<Project>> {
        let existing = self.state.lock().await.collection.get(id).cloned();

        debug!("Deleting project {id}");
        self.gateway.delete(id).await?;

        let mut state = self.state.lock().await;
        let removed = state.collection.remove(id).or(existing);
        state.forget(id);
        state.refresh();
        info!("Deleted project {id}");
        Ok(removed)
    }

    // ---------------------------------------------------------------------
    // One-shot operations
    // ---------------------------------------------------------------------

    /// Apply list parameters and return the resulting view.
    pub async fn list(&self, params: &ListProjects) -> Result<ProjectView> {
        let mut state = self.state.lock().await;
        if let Some(id) = &params.expand {
            if !state.collection.contains(id) {
                return Err(SproutError::ProjectNotFound { id: id.clone() });
            }
            if !state.selection.is_expanded(id) {
                state.selection.toggle_description(id);
            }
        }
        state.params = params.into();
        state.refresh();
        Ok(state.view.clone())
    }

    /// Create a project in one step: replace the editor with a creation
    /// draft built from `params`, then submit it.
    pub async fn create_project(&self, params: &CreateProject) -> Result<SubmitOutcome> {
        self.state.lock().await.editor = EditorSession::Creating(Draft::from(params));
        self.submit().await
    }

    /// Edit a project in one step: begin editing, overlay the provided
    /// fields, then submit.
    pub async fn edit_project(&self, params: &EditProject) -> Result<SubmitOutcome> {
        if params.is_empty() {
            return Err(SproutError::invalid_input("fields")
                .with_reason("Provide at least one field to change"));
        }
        {
            let mut state = self.state.lock().await;
            let State {
                collection, editor, ..
            } = &mut *state;
            editor.begin_edit(collection, &params.id)?;
            if let Some(draft) = editor.draft_mut() {
                params.apply_to(draft);
            }
        }
        self.submit().await
    }
}
