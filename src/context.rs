//! Gallery context for the desktop app.
//!
//! The controller is built in `main` before the window opens, wrapped in a
//! signal by [`App`](crate::app::App) and read by every page and component
//! through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let gallery = use_gallery();
//!
//! spawn(async move {
//!     let _ = gallery().load_all().await;
//! });
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use gallery_core::{GalleryConfig, GalleryController, HttpBackend, PdfRenderer};

use crate::dialogs::DialogPrompt;

/// Shared controller type for context.
///
/// `GalleryController` is a cheap handle over shared state, so components
/// clone it out of the signal before moving it into async tasks.
pub type SharedGallery = Signal<GalleryController>;

/// Build the controller the window talks through.
pub fn build_controller(config: &GalleryConfig) -> anyhow::Result<GalleryController> {
    let backend = Arc::new(HttpBackend::from_config(config)?);
    let controller = GalleryController::new(backend, Arc::new(DialogPrompt))
        .with_renderer(pdf_renderer(config)?)
        .with_config(config);
    Ok(controller)
}

#[cfg(feature = "pdfium")]
fn pdf_renderer(config: &GalleryConfig) -> anyhow::Result<Arc<dyn PdfRenderer>> {
    Ok(Arc::new(gallery_core::PdfiumRenderer::from_config(config)?))
}

#[cfg(not(feature = "pdfium"))]
fn pdf_renderer(_config: &GalleryConfig) -> anyhow::Result<Arc<dyn PdfRenderer>> {
    tracing::info!("Built without the pdfium feature; PDF cards stay blank");
    Ok(Arc::new(gallery_core::NoPdfRenderer))
}

/// Hook to access the gallery controller from context.
pub fn use_gallery() -> SharedGallery {
    use_context::<SharedGallery>()
}

/// Hook to access the configuration from context.
pub fn use_config() -> Signal<GalleryConfig> {
    use_context::<Signal<GalleryConfig>>()
}
