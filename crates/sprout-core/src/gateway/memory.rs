//! In-memory gateway implementation for testing.
//!
//! This module provides [`InMemoryGateway`], a process-local implementation
//! of the [`ProjectGateway`] trait suitable for tests and offline demos.
//!
//! ## Limitations
//!
//! - **No persistence**: all records are lost when the process exits
//! - **Single-process only**: nothing is shared across process boundaries

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use async_trait::async_trait;

use super::ProjectGateway;
use crate::{
    error::{Result, SproutError},
    models::{Project, ProjectFields, ProjectId},
};

#[derive(Debug, Default)]
struct Store {
    projects: Vec<Project>,
    next_id: u64,
    fail_next: Option<SproutError>,
}

impl Store {
    fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| &project.id == id)
    }

    fn allocate_id(&mut self) -> ProjectId {
        loop {
            self.next_id += 1;
            let candidate = ProjectId::from(format!("p{}", self.next_id));
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

/// In-memory project store.
///
/// Behaves like a well-behaved remote store: ids are assigned on create,
/// unknown ids fail with `NotFound`, and blank names are rejected with
/// `ValidationRejected`.
///
/// ## Example
///
/// ```rust
/// use sprout_core::gateway::{InMemoryGateway, ProjectGateway};
///
/// # async fn example() -> sprout_core::Result<()> {
/// let gateway = InMemoryGateway::new();
/// assert!(gateway.list_all().await?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    store: Mutex<Store>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

/// Converts a lock poison error to a server error.
fn poison_err<T>(_: PoisonError<T>) -> SproutError {
    SproutError::ServerError {
        status: 500,
        message: "store lock poisoned".to_string(),
    }
}

impl InMemoryGateway {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `projects`, in order.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            store: Mutex::new(Store {
                projects,
                ..Store::default()
            }),
            ..Self::default()
        }
    }

    /// Delay every call by `latency` before it touches the store.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next call fail with `error` instead of touching the store.
    pub fn fail_next(&self, error: SproutError) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next = Some(error);
        }
    }

    /// Number of calls received so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored projects.
    pub fn projects(&self) -> Vec<Project> {
        self.store
            .lock()
            .map(|store| store.projects.clone())
            .unwrap_or_default()
    }

    async fn arrive(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn enter(&self) -> Result<MutexGuard<'_, Store>> {
        let mut store = self.store.lock().map_err(poison_err)?;
        match store.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(store),
        }
    }
}

fn check_fields(fields: &ProjectFields) -> Result<()> {
    if fields.name.trim().is_empty() {
        return Err(SproutError::ValidationRejected {
            message: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ProjectGateway for InMemoryGateway {
    async fn list_all(&self) -> Result<Vec<Project>> {
        self.arrive().await;
        let store = self.enter()?;
        Ok(store.projects.clone())
    }

    async fn create(&self, fields: &ProjectFields) -> Result<ProjectId> {
        self.arrive().await;
        let mut store = self.enter()?;
        check_fields(fields)?;
        let id = store.allocate_id();
        store.projects.push(Project::new(id.clone(), fields.clone()));
        Ok(id)
    }

    async fn update(&self, id: &ProjectId, fields: &ProjectFields) -> Result<()> {
        self.arrive().await;
        let mut store = self.enter()?;
        let index = store
            .position(id)
            .ok_or_else(|| SproutError::NotFound { id: id.clone() })?;
        check_fields(fields)?;
        store.projects[index].apply(fields.clone());
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<()> {
        self.arrive().await;
        let mut store = self.enter()?;
        let index = store
            .position(id)
            .ok_or_else(|| SproutError::NotFound { id: id.clone() })?;
        store.projects.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::PlantType;

    fn fields(name: &str) -> ProjectFields {
        ProjectFields {
            name: name.to_string(),
            description: String::new(),
            plant_type: PlantType::Alface,
            start_date: date(2024, 2, 1),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let gateway = InMemoryGateway::new();
        let first = gateway.create(&fields("A")).await.unwrap();
        let second = gateway.create(&fields("B")).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(gateway.list_all().await.unwrap().len(), 2);
        assert_eq!(gateway.calls(), 3);
    }

    #[tokio::test]
    async fn test_seeded_ids_are_not_reused() {
        let seeded = Project::new(ProjectId::from("p1"), fields("Seed"));
        let gateway = InMemoryGateway::with_projects(vec![seeded]);
        let id = gateway.create(&fields("New")).await.unwrap();
        assert_eq!(id, ProjectId::from("p2"));
    }

    #[tokio::test]
    async fn test_unknown_ids_fail_with_not_found() {
        let gateway = InMemoryGateway::new();
        let missing = ProjectId::from("nope");
        assert!(matches!(
            gateway.update(&missing, &fields("X")).await,
            Err(SproutError::NotFound { .. })
        ));
        assert!(matches!(
            gateway.delete(&missing).await,
            Err(SproutError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let gateway = InMemoryGateway::new();
        assert!(matches!(
            gateway.create(&fields("  ")).await,
            Err(SproutError::ValidationRejected { .. })
        ));
        assert!(gateway.projects().is_empty());
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let gateway = InMemoryGateway::new();
        gateway.fail_next(SproutError::unreachable("connection refused"));
        assert!(matches!(
            gateway.list_all().await,
            Err(SproutError::Unreachable { .. })
        ));
        assert!(gateway.list_all().await.is_ok());
    }
}
