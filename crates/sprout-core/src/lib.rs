//! Core library for the Sprout community-garden project manager.
//!
//! This crate holds the client-side state of a list of garden projects kept
//! on a remote record store: the canonical collection, the filtered and
//! sorted view derived from it, the create/edit session with local
//! validation, and the selection and description-expansion state.
//!
//! # Architecture
//!
//! - **Gateway** ([`gateway`]): Async CRUD against the remote store, over
//!   HTTP in production and in memory for tests
//! - **Collection** ([`collection`]): The canonical, insertion-ordered records
//! - **View** ([`view`]): A pure function from collection and
//!   [`models::ViewParams`] to the displayed projection
//! - **Editor** ([`editor`]) and **Selection** ([`selection`]): User input state
//! - **Manager** ([`manager`]): Owns all of the above and sequences every
//!   mutation as gateway call first, local change second
//! - **Display** ([`display`]): Markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sprout_core::{
//!     gateway::InMemoryGateway,
//!     models::{DraftField, PlantType},
//!     ManagerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ManagerBuilder::new()
//!     .with_gateway(Arc::new(InMemoryGateway::new()))
//!     .build()
//!     .await?;
//!
//! manager.begin_create().await;
//! manager.set_field(DraftField::Name, "Horta Viva").await?;
//! manager.set_field(DraftField::PlantType, "Alface").await?;
//! manager.set_field(DraftField::StartDate, "2024-03-01").await?;
//! let outcome = manager.submit().await?;
//! println!("{outcome}");
//!
//! manager.set_plant_filter(Some(PlantType::Alface)).await;
//! for project in &manager.view().await {
//!     println!("Project: {}", project.name);
//! }
//! # Ok(())
//! # }
//! ```

mod collate;

pub mod collection;
pub mod display;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod models;
pub mod params;
pub mod selection;
pub mod view;

// Re-export commonly used types
pub use collection::Collection;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, PlantTypes, ProjectList, SessionStatus,
    UpdateResult,
};
pub use editor::{EditorSession, Submission};
pub use error::{Result, SproutError};
pub use gateway::{HttpGateway, InMemoryGateway, ProjectGateway};
pub use manager::{ManagerBuilder, ProjectManager, Snapshot, SubmitOutcome};
pub use models::{Draft, DraftField, PlantType, Project, ProjectFields, ProjectId, SortKey, ViewParams};
pub use params::{CreateProject, EditProject, Id, ListProjects};
pub use selection::Selection;
pub use view::{derive_view, ProjectView};
