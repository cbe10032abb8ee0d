//! Client configuration
//!
//! Read from a TOML file; every key is optional.
//!
//! ```toml
//! server_url = "http://127.0.0.1:5000"
//! thumbnail_scale = 1.0
//! removal_transition_ms = 500
//! overlay_close_ms = 300
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GalleryError, GalleryResult};
use crate::thumbnail::DEFAULT_THUMBNAIL_SCALE;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Base URL of the gallery server
    pub server_url: String,
    /// Scale factor for PDF page-one thumbnails
    pub thumbnail_scale: f32,
    /// How long a deleted card fades before it is detached
    pub removal_transition_ms: u64,
    /// How long the detail overlay takes to close
    pub overlay_close_ms: u64,
    pub user_agent: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
            removal_transition_ms: 500,
            overlay_close_ms: 300,
            user_agent: concat!("media-gallery/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GalleryConfig {
    /// `<config dir>/media-gallery/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("media-gallery").join("config.toml"))
    }

    pub fn from_toml(text: &str) -> GalleryResult<Self> {
        toml::from_str(text).map_err(|e| GalleryError::Config(e.to_string()))
    }

    /// Load from an explicit path (must exist), else from the default path
    /// if present, else defaults.
    pub fn load(path: Option<&Path>) -> GalleryResult<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> GalleryResult<Self> {
        debug!(path = %path.display(), "Loading config");
        let text = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        if let Some(url) = server_url {
            self.server_url = url;
        }
        self
    }

    pub fn removal_transition(&self) -> Duration {
        Duration::from_millis(self.removal_transition_ms)
    }

    pub fn overlay_close(&self) -> Duration {
        Duration::from_millis(self.overlay_close_ms)
    }
}
