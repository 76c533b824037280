//! HTTP gateway for the remote project store.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use super::ProjectGateway;
use crate::{
    error::{ConfigResultExt, Result, SproutError},
    models::{Project, ProjectFields, ProjectId},
};

/// Default request timeout applied by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway speaking the REST protocol of the project store.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a gateway for the store rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `SproutError::Configuration` if the URL is not absolute
    /// http(s) or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).config_context("Invalid base URL")?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SproutError::Configuration {
                message: format!("Unsupported URL scheme '{}'", base_url.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .config_context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are issued against, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn collection_url(&self) -> Url {
        self.endpoint(None)
    }

    /// Ids are opaque, so they travel as one percent-encoded path segment.
    fn item_url(&self, id: &ProjectId) -> Url {
        self.endpoint(Some(id))
    }

    fn endpoint(&self, id: Option<&ProjectId>) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("projects");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    async fn send(&self, request: RequestBuilder, id: Option<&ProjectId>) -> Result<Response> {
        let response = request.send().await.map_err(SproutError::unreachable)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body, id))
    }
}

/// Map a non-success HTTP status onto the gateway failure taxonomy.
fn status_error(status: StatusCode, body: &str, id: Option<&ProjectId>) -> SproutError {
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("no details").to_string()
    } else {
        body.trim().to_string()
    };

    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => SproutError::NotFound { id: id.clone() },
        (status, _) if status.is_server_error() => SproutError::ServerError {
            status: status.as_u16(),
            message,
        },
        (StatusCode::NOT_FOUND, None) => SproutError::ServerError {
            status: status.as_u16(),
            message,
        },
        _ => SproutError::ValidationRejected { message },
    }
}

/// Body of a successful create: a bare id or an object carrying one.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedId {
    Bare(ProjectId),
    Wrapped {
        #[serde(rename = "_id", alias = "id")]
        id: ProjectId,
    },
}

fn parse_created_id(body: &str) -> Result<ProjectId> {
    match serde_json::from_str::<CreatedId>(body) {
        Ok(CreatedId::Bare(id)) | Ok(CreatedId::Wrapped { id }) => Ok(id),
        // Plain-text ids are accepted as long as they are a single token.
        Err(_) if !body.trim().is_empty() && !body.trim().contains(char::is_whitespace) => {
            Ok(ProjectId::from(body.trim()))
        }
        Err(e) => Err(SproutError::Decode { source: e }),
    }
}

#[async_trait]
impl ProjectGateway for HttpGateway {
    async fn list_all(&self) -> Result<Vec<Project>> {
        let response = self.send(self.client.get(self.collection_url()), None).await?;
        let body = response.text().await.map_err(SproutError::unreachable)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, fields: &ProjectFields) -> Result<ProjectId> {
        let request = self.client.post(self.collection_url()).json(fields);
        let response = self.send(request, None).await?;
        let body = response.text().await.map_err(SproutError::unreachable)?;
        parse_created_id(&body)
    }

    async fn update(&self, id: &ProjectId, fields: &ProjectFields) -> Result<()> {
        let request = self.client.put(self.item_url(id)).json(fields);
        self.send(request, Some(id)).await?;
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> Result<()> {
        self.send(self.client.delete(self.item_url(id)), Some(id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(matches!(
            HttpGateway::new("ftp://example.com", DEFAULT_TIMEOUT),
            Err(SproutError::Configuration { .. })
        ));
        assert!(HttpGateway::new("not a url", DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let gateway = HttpGateway::new("http://localhost:5000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000");
        assert_eq!(
            gateway.collection_url().as_str(),
            "http://localhost:5000/projects"
        );
        assert_eq!(
            gateway.item_url(&ProjectId::from("abc")).as_str(),
            "http://localhost:5000/projects/abc"
        );
    }

    #[test]
    fn test_item_url_encodes_id_and_keeps_base_path() {
        let gateway = HttpGateway::new("http://localhost:5000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            gateway.collection_url().as_str(),
            "http://localhost:5000/api/projects"
        );
        assert_eq!(
            gateway.item_url(&ProjectId::from("a/b?x=1#c")).as_str(),
            "http://localhost:5000/api/projects/a%2Fb%3Fx=1%23c"
        );
    }

    #[test]
    fn test_status_mapping() {
        let id = ProjectId::from("p1");
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "", Some(&id)),
            SproutError::NotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, "name required", Some(&id)),
            SproutError::ValidationRejected { ref message } if message == "name required"
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "", None),
            SproutError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_created_id_shapes() {
        assert_eq!(parse_created_id("\"abc\"").unwrap(), ProjectId::from("abc"));
        assert_eq!(parse_created_id("42").unwrap(), ProjectId::from("42"));
        assert_eq!(
            parse_created_id(r#"{"_id":"65a"}"#).unwrap(),
            ProjectId::from("65a")
        );
        assert_eq!(parse_created_id("65b9f0\n").unwrap(), ProjectId::from("65b9f0"));
        assert!(parse_created_id("").is_err());
    }
}
