//! Upload form data.

use std::path::Path;

use crate::error::{GalleryError, GalleryResult};

/// Which input the upload form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    #[default]
    File,
    Link,
}

impl UploadMode {
    /// Value sent in the multipart `type` field
    pub fn wire_name(&self) -> &'static str {
        match self {
            UploadMode::File => "file",
            UploadMode::Link => "link",
        }
    }
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub async fn read(path: &Path) -> GalleryResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

/// Fields of the upload form. Only the input matching `mode` is sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub mode: UploadMode,
    pub file: Option<FilePayload>,
    pub url: String,
}

/// The single content source an upload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSource<'a> {
    File(&'a FilePayload),
    Url(&'a str),
}

impl UploadForm {
    pub fn file(title: impl Into<String>, file: FilePayload) -> Self {
        Self {
            title: title.into(),
            mode: UploadMode::File,
            file: Some(file),
            ..Self::default()
        }
    }

    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mode: UploadMode::Link,
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Content source for the current mode; fails when it is missing.
    pub fn source(&self) -> GalleryResult<UploadSource<'_>> {
        match self.mode {
            UploadMode::File => self
                .file
                .as_ref()
                .map(UploadSource::File)
                .ok_or(GalleryError::MissingUploadSource),
            UploadMode::Link if self.url.trim().is_empty() => Err(GalleryError::MissingUploadSource),
            UploadMode::Link => Ok(UploadSource::Url(&self.url)),
        }
    }

    /// Back to an empty form in file mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
