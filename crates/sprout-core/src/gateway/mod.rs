//! Remote store gateway.
//!
//! The [`ProjectGateway`] trait is the boundary between the project manager
//! and the remote record store. The manager never talks HTTP directly:
//!
//! - **Production**: [`HttpGateway`] speaks the REST protocol
//!   (`GET/POST /projects`, `PUT/DELETE /projects/{id}`)
//! - **Testing**: [`InMemoryGateway`] keeps records in process and can be told
//!   to fail the next call
//!
//! Every failure is returned to the caller as-is; gateways never retry.

pub mod http;
pub mod memory;

use async_trait::async_trait;

pub use http::HttpGateway;
pub use memory::InMemoryGateway;

use crate::{
    error::Result,
    models::{Project, ProjectFields, ProjectId},
};

/// CRUD operations offered by the remote record store.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetch the full collection in store order.
    ///
    /// Fails with `Unreachable` or `ServerError`.
    async fn list_all(&self) -> Result<Vec<Project>>;

    /// Persist a new project and return its assigned id.
    ///
    /// Fails with `ValidationRejected` or `Unreachable`.
    async fn create(&self, fields: &ProjectFields) -> Result<ProjectId>;

    /// Replace every field of an existing project.
    ///
    /// Fails with `NotFound`, `ValidationRejected` or `Unreachable`.
    async fn update(&self, id: &ProjectId, fields: &ProjectFields) -> Result<()>;

    /// Remove a project.
    ///
    /// Fails with `NotFound` or `Unreachable`.
    async fn delete(&self, id: &ProjectId) -> Result<()>;
}
