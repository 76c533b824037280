//! Display formatting for projects, views and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! everything that needs context beyond a single value, such as view
//! positions, the expanded description or the outcome of a mutation, goes
//! through a small wrapper type:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrapper │    │    Markdown     │
//! │ (Project, ...)  │───▶│     Types       │───▶│     Output      │
//! │                 │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: The numbered project listing and plant-type catalogue
//! - [`results`]: Create, update and delete outcomes
//! - [`status`]: Success/failure lines and the editor status block
//! - [`datetime`]: Start date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{PlantType, Project, ProjectFields, ProjectId},
//! };
//!
//! let project = Project::new(
//!     ProjectId::from("42"),
//!     ProjectFields {
//!         name: "Horta Viva".to_string(),
//!         description: String::new(),
//!         plant_type: PlantType::Tomate,
//!         start_date: date(2024, 9, 1),
//!     },
//! );
//!
//! let output = CreateResult::new(project).to_string();
//! assert!(output.contains("Created project with ID: 42"));
//!
//! let status = OperationStatus::success("Draft discarded");
//! assert_eq!(status.to_string(), "Success: Draft discarded\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{truncate_description, PlantTypes, ProjectList, DESCRIPTION_PREVIEW_CHARS};
pub use datetime::StartDate;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, SessionStatus};
