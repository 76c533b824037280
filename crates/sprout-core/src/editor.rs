//! Editor session: the create/edit input mode state machine.
//!
//! ```text
//!            begin_create / set_field
//!   ┌──────┐ ─────────────────────────▶ ┌───────────────────┐
//!   │ Idle │                            │ Creating(draft)   │
//!   └──────┘ ◀───────────────────────── └───────────────────┘
//!      ▲  ▲     create ok / cancel           │
//!      │  │                                  │ begin_edit
//!      │  │     update ok / cancel           ▼
//!      │  └──────────────────────── ┌──────────────────────────┐
//!      └─────── begin_edit ───────▶ │ Editing(target, draft)   │
//!                                   └──────────────────────────┘
//! ```
//!
//! The session never talks to the gateway itself. [`EditorSession::prepare_submit`]
//! validates the draft and hands back a [`Submission`]; the caller performs
//! the remote call and, on success, reports back with
//! [`EditorSession::finish`].

use crate::{
    collection::Collection,
    error::{Result, SproutError},
    models::{Draft, DraftField, ProjectFields, ProjectId},
};

/// Current input mode. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorSession {
    #[default]
    Idle,
    Creating(Draft),
    Editing { target: ProjectId, draft: Draft },
}

/// A validated draft on its way to the remote store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(ProjectFields),
    Update { id: ProjectId, fields: ProjectFields },
}

impl EditorSession {
    /// Enter `Creating` with an empty draft. Already creating keeps the
    /// current draft; editing discards the edit.
    pub fn begin_create(&mut self) {
        if !matches!(self, EditorSession::Creating(_)) {
            *self = EditorSession::Creating(Draft::default());
        }
    }

    /// Enter `Editing` for `id`, seeding the draft from the project's current
    /// fields. Any draft in progress is discarded.
    ///
    /// # Errors
    ///
    /// * `SproutError::ProjectNotFound` - `id` is not in the collection; the
    ///   session is left unchanged
    pub fn begin_edit(&mut self, collection: &Collection, id: &ProjectId) -> Result<()> {
        let project = collection
            .get(id)
            .ok_or_else(|| SproutError::ProjectNotFound { id: id.clone() })?;
        *self = EditorSession::Editing {
            target: id.clone(),
            draft: Draft::from(project),
        };
        Ok(())
    }

    /// Update one draft field. Editing a field while idle starts a new
    /// project draft.
    ///
    /// # Errors
    ///
    /// * `SproutError::InvalidInput` - the value does not parse; nothing changes
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<()> {
        match self {
            EditorSession::Idle => {
                let mut draft = Draft::default();
                draft.set_field(field, value)?;
                *self = EditorSession::Creating(draft);
                Ok(())
            }
            EditorSession::Creating(draft) | EditorSession::Editing { draft, .. } => {
                draft.set_field(field, value)
            }
        }
    }

    /// Discard the draft and return to `Idle`. Returns whether anything was
    /// discarded.
    pub fn cancel(&mut self) -> bool {
        let was_active = !self.is_idle();
        *self = EditorSession::Idle;
        was_active
    }

    /// Validate the draft and describe the remote call to make.
    ///
    /// # Errors
    ///
    /// * `SproutError::InvalidInput` - the session is idle
    /// * `SproutError::MissingFields` - required fields are empty
    pub fn prepare_submit(&self) -> Result<Submission> {
        match self {
            EditorSession::Idle => Err(SproutError::invalid_input("draft")
                .with_reason("Nothing to submit: start a new project or edit one first")),
            EditorSession::Creating(draft) => Ok(Submission::Create(draft.validate()?)),
            EditorSession::Editing { target, draft } => Ok(Submission::Update {
                id: target.clone(),
                fields: draft.validate()?,
            }),
        }
    }

    /// Return to `Idle` after `submission` succeeded, provided the session is
    /// still in the mode that produced it. Returns whether the draft was
    /// cleared.
    pub fn finish(&mut self, submission: &Submission) -> bool {
        let still_current = match (&*self, submission) {
            (EditorSession::Creating(_), Submission::Create(_)) => true,
            (EditorSession::Editing { target, .. }, Submission::Update { id, .. }) => target == id,
            _ => false,
        };
        if still_current {
            *self = EditorSession::Idle;
        }
        still_current
    }

    /// Drop an edit of `id` after that project disappeared from the
    /// collection.
    pub fn forget(&mut self, id: &ProjectId) {
        if self.target() == Some(id) {
            *self = EditorSession::Idle;
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorSession::Idle)
    }

    /// Draft in progress, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditorSession::Idle => None,
            EditorSession::Creating(draft) | EditorSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditorSession::Idle => None,
            EditorSession::Creating(draft) | EditorSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// Id of the project being edited, if any.
    pub fn target(&self) -> Option<&ProjectId> {
        match self {
            EditorSession::Editing { target, .. } => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{PlantType, Project};

    fn seeded_collection() -> Collection {
        let mut collection = Collection::new();
        collection
            .append(Project::new(
                ProjectId::from("p1"),
                ProjectFields {
                    name: "Horta Escola".to_string(),
                    description: "Canteiros".to_string(),
                    plant_type: PlantType::Cenoura,
                    start_date: date(2024, 5, 20),
                },
            ))
            .unwrap();
        collection
    }

    fn filled_draft(session: &mut EditorSession) {
        session.set_field(DraftField::Name, "Nova Horta").unwrap();
        session.set_field(DraftField::PlantType, "Alface").unwrap();
        session.set_field(DraftField::StartDate, "2024-06-01").unwrap();
    }

    #[test]
    fn test_set_field_while_idle_starts_creating() {
        let mut session = EditorSession::default();
        session.set_field(DraftField::Name, "Horta").unwrap();
        assert!(matches!(session, EditorSession::Creating(ref d) if d.name == "Horta"));
    }

    #[test]
    fn test_invalid_field_while_idle_stays_idle() {
        let mut session = EditorSession::default();
        assert!(session.set_field(DraftField::StartDate, "tomorrow").is_err());
        assert!(session.is_idle());
    }

    #[test]
    fn test_begin_edit_seeds_draft() {
        let collection = seeded_collection();
        let mut session = EditorSession::default();
        session.begin_edit(&collection, &ProjectId::from("p1")).unwrap();
        assert_eq!(session.target(), Some(&ProjectId::from("p1")));
        let draft = session.draft().unwrap();
        assert_eq!(draft.name, "Horta Escola");
        assert_eq!(draft.plant_type, Some(PlantType::Cenoura));
    }

    #[test]
    fn test_begin_edit_unknown_id_leaves_session() {
        let collection = seeded_collection();
        let mut session = EditorSession::default();
        session.set_field(DraftField::Name, "Keep me").unwrap();
        let err = session
            .begin_edit(&collection, &ProjectId::from("missing"))
            .unwrap_err();
        assert!(matches!(err, SproutError::ProjectNotFound { .. }));
        assert_eq!(session.draft().unwrap().name, "Keep me");
    }

    #[test]
    fn test_switching_modes_clears_draft() {
        let collection = seeded_collection();
        let mut session = EditorSession::default();
        session.set_field(DraftField::Name, "Half typed").unwrap();
        session.begin_edit(&collection, &ProjectId::from("p1")).unwrap();
        assert_eq!(session.draft().unwrap().name, "Horta Escola");

        session.begin_create();
        assert_eq!(session.draft(), Some(&Draft::default()));
    }

    #[test]
    fn test_begin_create_keeps_existing_creation_draft() {
        let mut session = EditorSession::default();
        session.set_field(DraftField::Name, "Work in progress").unwrap();
        session.begin_create();
        assert_eq!(session.draft().unwrap().name, "Work in progress");
    }

    #[test]
    fn test_prepare_submit_reports_missing_fields() {
        let mut session = EditorSession::default();
        session.begin_create();
        session.set_field(DraftField::PlantType, "Tomate").unwrap();
        match session.prepare_submit() {
            Err(SproutError::MissingFields { fields }) => {
                assert_eq!(fields, vec![DraftField::Name, DraftField::StartDate]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
        assert!(matches!(session, EditorSession::Creating(_)));
    }

    #[test]
    fn test_prepare_submit_when_idle_fails() {
        let session = EditorSession::default();
        assert!(matches!(
            session.prepare_submit(),
            Err(SproutError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_finish_only_clears_matching_mode() {
        let collection = seeded_collection();
        let mut session = EditorSession::default();
        filled_draft(&mut session);
        let submission = session.prepare_submit().unwrap();
        assert!(matches!(submission, Submission::Create(_)));

        session.begin_edit(&collection, &ProjectId::from("p1")).unwrap();
        assert!(!session.finish(&submission));
        assert!(session.target().is_some());

        let update = session.prepare_submit().unwrap();
        assert!(session.finish(&update));
        assert!(session.is_idle());
    }

    #[test]
    fn test_cancel_and_forget() {
        let collection = seeded_collection();
        let mut session = EditorSession::default();
        assert!(!session.cancel());

        session.begin_edit(&collection, &ProjectId::from("p1")).unwrap();
        session.forget(&ProjectId::from("other"));
        assert!(!session.is_idle());
        session.forget(&ProjectId::from("p1"));
        assert!(session.is_idle());

        filled_draft(&mut session);
        assert!(session.cancel());
        assert!(session.draft().is_none());
    }
}
