//! Data models for garden projects.
//!
//! This module contains the domain models of the project manager: the
//! [`Project`] record as held in the collection, the validated
//! [`ProjectFields`] payload sent to the remote store, the editable [`Draft`],
//! and the [`ViewParams`] that drive the derived view. Display
//! implementations live in [`crate::display::models`].
//!
//! # Wire format
//!
//! Projects travel as JSON objects with camelCase keys:
//!
//! ```rust
//! use sprout_core::models::{PlantType, Project};
//!
//! let json = r#"{
//!     "_id": "64f1",
//!     "name": "Escola Municipal Horta Viva",
//!     "description": "Canteiros suspensos no pátio",
//!     "plantType": "Alface",
//!     "startDate": "2024-03-01"
//! }"#;
//! let project: Project = serde_json::from_str(json)?;
//! assert_eq!(project.plant_type, Some(PlantType::Alface));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod draft;
pub mod filters;
pub mod plant_type;
pub mod project;

#[cfg(test)]
mod tests;

pub use draft::{Draft, DraftField};
pub use filters::{SortKey, ViewParams};
pub use plant_type::PlantType;
pub use project::{parse_date, Project, ProjectFields, ProjectId};
