//! Media Gallery Core Library
//!
//! Client-side model for a personal media/link gallery backed by a small
//! REST server.
//!
//! ## Overview
//!
//! The server owns every resource (image, PDF, link, document). This crate
//! mirrors its collection as cards, filters them by text and category,
//! builds the detail view for one resource, and drives uploads, deletes and
//! description edits through [`GalleryController`].
//!
//! - **Model**: [`Resource`], [`ResourceKind`]
//! - **Cards**: [`Card`], [`CardList`], PDF thumbnails via [`PdfRenderer`]
//! - **Detail view**: [`DetailView`], [`DescriptionEditor`], [`Overlay`]
//! - **Filtering**: [`Filter`], [`Category`]
//! - **Backend**: [`GalleryBackend`], [`HttpBackend`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use gallery_core::{AutoConfirm, Filter, GalleryController, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(HttpBackend::new("http://127.0.0.1:5000")?);
//!     let gallery = GalleryController::new(backend, Arc::new(AutoConfirm));
//!
//!     gallery.load_all().await?;
//!     gallery.set_filter(Filter::new("cat", "all"));
//!
//!     for card in gallery.visible_cards() {
//!         println!("[{}] {}", card.tag(), card.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod card;
pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod events;
pub mod filter;
pub mod prompt;
pub mod resource;
pub mod thumbnail;
pub mod upload;

// Re-exports
pub use backend::{DeleteResponse, GalleryBackend, HttpBackend};
pub use card::{Card, CardIcon, CardList, CardPhase, Preview, ThumbnailState};
pub use config::GalleryConfig;
pub use controller::{DeleteOutcome, GalleryController};
pub use detail::{
    youtube_id, DescriptionEditor, DetailContent, DetailView, EditorState, Overlay, OverlayPhase,
};
pub use error::{GalleryError, GalleryResult};
pub use events::GalleryEvent;
pub use filter::{Category, Filter};
pub use prompt::{AutoConfirm, UserPrompt};
pub use resource::{Resource, ResourceId, ResourceKind};
pub use thumbnail::{NoPdfRenderer, PdfPage, PdfRenderer, RasterPage, Viewport};
#[cfg(feature = "pdfium")]
pub use thumbnail::PdfiumRenderer;
pub use upload::{FilePayload, UploadForm, UploadMode, UploadSource};
