//! Backend REST client
//!
//! The gallery server owns all durable state. This module consumes its four
//! endpoints:
//!
//! | Method   | Path            | Body                         | Reply                        |
//! |----------|-----------------|------------------------------|------------------------------|
//! | `GET`    | `/api/files`    |                              | JSON array of resources      |
//! | `POST`   | `/upload`       | multipart form               | 2xx on success               |
//! | `DELETE` | `/delete/{id}`  |                              | `{ success, error? }`        |
//! | `PUT`    | `/update/{id}`  | `{ "description": ... }`     | 2xx on success               |

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::resource::{Resource, ResourceId};
use crate::upload::{UploadForm, UploadSource};

/// Reply of the delete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    description: &'a str,
}

/// Operations the gallery needs from its server
#[async_trait]
pub trait GalleryBackend: Send + Sync {
    /// Fetch every resource, in the server's order.
    async fn list(&self) -> GalleryResult<Vec<Resource>>;

    /// Create a resource from a file or a URL.
    async fn upload(&self, form: &UploadForm) -> GalleryResult<()>;

    /// Delete a resource. Application-level failures come back as
    /// `DeleteResponse { success: false, .. }`, not as `Err`.
    async fn delete(&self, id: ResourceId) -> GalleryResult<DeleteResponse>;

    /// Replace a resource's description.
    async fn update_description(&self, id: ResourceId, description: &str) -> GalleryResult<()>;

    /// Turn a resource `content` value into something fetchable.
    fn resolve_url(&self, content: &str) -> String {
        content.to_string()
    }
}

/// [`GalleryBackend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(server_url: &str) -> GalleryResult<Self> {
        Self::with_user_agent(server_url, concat!("media-gallery/", env!("CARGO_PKG_VERSION")))
    }

    pub fn from_config(config: &GalleryConfig) -> GalleryResult<Self> {
        Self::with_user_agent(&config.server_url, &config.user_agent)
    }

    fn with_user_agent(server_url: &str, user_agent: &str) -> GalleryResult<Self> {
        let mut base = Url::parse(server_url)
            .map_err(|e| GalleryError::Config(format!("invalid server url {server_url:?}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> GalleryResult<Url> {
        self.base
            .join(path)
            .map_err(|e| GalleryError::Config(format!("invalid endpoint {path:?}: {e}")))
    }

    async fn check_status(response: reqwest::Response) -> GalleryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(GalleryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl GalleryBackend for HttpBackend {
    async fn list(&self) -> GalleryResult<Vec<Resource>> {
        let url = self.endpoint("api/files")?;
        debug!(%url, "Fetching resources");
        let response = Self::check_status(self.client.get(url).send().await?).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn upload(&self, form: &UploadForm) -> GalleryResult<()> {
        let source = form.source()?;
        let mut multipart = Form::new()
            .text("title", form.title.clone())
            .text("description", form.description.clone())
            .text("type", form.mode.wire_name());

        multipart = match source {
            UploadSource::File(file) => multipart.part(
                "file",
                Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
            ),
            UploadSource::Url(url) => multipart.text("url", url.to_string()),
        };

        let url = self.endpoint("upload")?;
        debug!(%url, mode = form.mode.wire_name(), "Uploading resource");
        Self::check_status(self.client.post(url).multipart(multipart).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: ResourceId) -> GalleryResult<DeleteResponse> {
        let url = self.endpoint(&format!("delete/{id}"))?;
        debug!(%url, "Deleting resource");
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The server reports failures as JSON even on 404/500
        match serde_json::from_str::<DeleteResponse>(&body) {
            Ok(reply) => Ok(reply),
            Err(e) if status.is_success() => Err(GalleryError::Decode(e)),
            Err(_) => Err(GalleryError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    async fn update_description(&self, id: ResourceId, description: &str) -> GalleryResult<()> {
        let url = self.endpoint(&format!("update/{id}"))?;
        debug!(%url, "Updating description");
        let request = self.client.put(url).json(&UpdateBody { description });
        Self::check_status(request.send().await?).await?;
        Ok(())
    }

    fn resolve_url(&self, content: &str) -> String {
        self.base
            .join(content)
            .map(String::from)
            .unwrap_or_else(|_| content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let backend = HttpBackend::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            backend.resolve_url("/static/uploads/cat.png"),
            "http://127.0.0.1:5000/static/uploads/cat.png"
        );
        assert_eq!(
            backend.resolve_url("https://youtu.be/abc123"),
            "https://youtu.be/abc123"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let backend = HttpBackend::new("http://host:8080/gallery").unwrap();
        assert_eq!(
            backend.endpoint("api/files").unwrap().as_str(),
            "http://host:8080/gallery/api/files"
        );
    }

    #[test]
    fn test_invalid_server_url() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn test_delete_response_shapes() {
        let ok: DeleteResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok, DeleteResponse::ok());

        let missing: DeleteResponse =
            serde_json::from_str(r#"{"error": "Archivo no encontrado"}"#).unwrap();
        assert!(!missing.success);
        assert_eq!(missing.error.as_deref(), Some("Archivo no encontrado"));
    }
}
