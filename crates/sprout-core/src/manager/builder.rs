//! Builder for creating and configuring ProjectManager instances.

use std::{sync::Arc, time::Duration};

use log::debug;

use super::ProjectManager;
use crate::{
    error::Result,
    gateway::{http::DEFAULT_TIMEOUT, HttpGateway, ProjectGateway},
    models::ViewParams,
};

/// Remote store used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Builder for creating and configuring ProjectManager instances.
#[derive(Clone, Default)]
pub struct ManagerBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    gateway: Option<Arc<dyn ProjectGateway>>,
    params: ViewParams,
}

impl ManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remote store base URL.
    ///
    /// If not specified, uses `http://localhost:5000`.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Sets the HTTP request timeout. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Use a custom gateway instead of HTTP. Base URL and timeout are then
    /// ignored.
    pub fn with_gateway(mut self, gateway: Arc<dyn ProjectGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Initial view parameters.
    pub fn with_view_params(mut self, params: ViewParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the manager without contacting the remote store. The
    /// collection starts empty until [`ProjectManager::load`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns `SproutError::Configuration` if the base URL is invalid
    pub fn build_unloaded(self) -> Result<ProjectManager> {
        let gateway: Arc<dyn ProjectGateway> = match self.gateway {
            Some(gateway) => gateway,
            None => {
                let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
                debug!("Using remote store at {base_url}");
                Arc::new(HttpGateway::new(
                    base_url,
                    self.timeout.unwrap_or(DEFAULT_TIMEOUT),
                )?)
            }
        };
        Ok(ProjectManager::new(gateway, self.params))
    }

    /// Builds the manager and seeds its collection from the remote store.
    ///
    /// # Errors
    ///
    /// Returns `SproutError::Configuration` if the base URL is invalid
    /// Returns the gateway failure if the initial listing fails
    pub async fn build(self) -> Result<ProjectManager> {
        let manager = self.build_unloaded()?;
        manager.load().await?;
        Ok(manager)
    }
}
