//! PDF thumbnails
//!
//! Rasterizing is delegated to a [`PdfRenderer`]; this module only drives
//! it (page one, fixed scale) and encodes the result as a PNG data URL.

use std::io::Cursor;

use async_trait::async_trait;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::{GalleryError, GalleryResult};

/// Scale used for thumbnails unless configured otherwise
pub const DEFAULT_THUMBNAIL_SCALE: f32 = 1.0;

/// Pixel size of a page at some scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

impl Viewport {
    /// Viewport for a page measured in points (1/72 in) at `scale`
    pub fn from_points(width_pt: f32, height_pt: f32, scale: f32) -> Self {
        Self {
            width: (width_pt * scale).round().max(1.0) as u32,
            height: (height_pt * scale).round().max(1.0) as u32,
            scale,
        }
    }
}

/// A loaded page that can be drawn
pub trait PdfPage: Send {
    fn viewport(&self, scale: f32) -> Viewport;

    fn render(&self, viewport: &Viewport) -> GalleryResult<RgbaImage>;
}

/// A page rasterized once at scale 1.0, where one point is one pixel.
/// Other scales are served by resampling the stored surface.
#[derive(Debug, Clone)]
pub struct RasterPage {
    surface: RgbaImage,
    width_pt: f32,
    height_pt: f32,
}

impl RasterPage {
    pub fn new(surface: RgbaImage, width_pt: f32, height_pt: f32) -> Self {
        Self {
            surface,
            width_pt,
            height_pt,
        }
    }
}

impl PdfPage for RasterPage {
    fn viewport(&self, scale: f32) -> Viewport {
        Viewport::from_points(self.width_pt, self.height_pt, scale)
    }

    fn render(&self, viewport: &Viewport) -> GalleryResult<RgbaImage> {
        if self.surface.dimensions() == (viewport.width, viewport.height) {
            return Ok(self.surface.clone());
        }
        Ok(imageops::resize(
            &self.surface,
            viewport.width,
            viewport.height,
            FilterType::Triangle,
        ))
    }
}

/// Opens PDF documents by URL
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn first_page(&self, url: &str) -> GalleryResult<Box<dyn PdfPage>>;
}

/// Renderer used when no PDF backend is compiled in; every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPdfRenderer;

#[async_trait]
impl PdfRenderer for NoPdfRenderer {
    async fn first_page(&self, _url: &str) -> GalleryResult<Box<dyn PdfPage>> {
        Err(GalleryError::Thumbnail(
            "no PDF renderer available in this build".to_string(),
        ))
    }
}

/// Encode an RGBA surface as `data:image/png;base64,...`
pub fn encode_data_url(surface: &RgbaImage) -> GalleryResult<String> {
    let mut buffer = Vec::new();
    surface.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(format!("data:image/png;base64,{encoded}"))
}

/// Rasterize page one of the document at `url` and return it as a data URL.
pub async fn render_thumbnail(
    renderer: &dyn PdfRenderer,
    url: &str,
    scale: f32,
) -> GalleryResult<String> {
    let page = renderer.first_page(url).await?;
    let viewport = page.viewport(scale);
    let surface = tokio::task::spawn_blocking(move || page.render(&viewport))
        .await
        .map_err(|e| GalleryError::Thumbnail(format!("render task failed: {e}")))??;
    encode_data_url(&surface)
}

#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumRenderer;

#[cfg(feature = "pdfium")]
mod pdfium {
    //! Renderer backed by a system pdfium library, bound at runtime.

    use async_trait::async_trait;
    use image::RgbaImage;
    use pdfium_render::prelude::*;

    use super::{PdfRenderer, RasterPage, Viewport};
    use crate::config::GalleryConfig;
    use crate::error::{GalleryError, GalleryResult};

    fn thumbnail_err(e: impl std::fmt::Display) -> GalleryError {
        GalleryError::Thumbnail(e.to_string())
    }

    /// Downloads the document, then renders with pdfium
    #[derive(Debug, Clone, Default)]
    pub struct PdfiumRenderer {
        client: reqwest::Client,
    }

    impl PdfiumRenderer {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }

        pub fn from_config(config: &GalleryConfig) -> GalleryResult<Self> {
            let client = reqwest::Client::builder()
                .user_agent(config.user_agent.as_str())
                .build()?;
            Ok(Self::new(client))
        }
    }

    /// Bind pdfium, parse the document and rasterize page one, all in one pass
    fn rasterize_first_page(bytes: &[u8]) -> GalleryResult<RasterPage> {
        let bindings = Pdfium::bind_to_system_library().map_err(thumbnail_err)?;
        let pdfium = Pdfium::new(bindings);
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(thumbnail_err)?;
        let page = document.pages().get(0).map_err(thumbnail_err)?;

        let (width_pt, height_pt) = (page.width().value, page.height().value);
        let natural = Viewport::from_points(width_pt, height_pt, 1.0);
        let config = PdfRenderConfig::new()
            .set_target_width(natural.width as i32)
            .set_maximum_height(natural.height as i32);
        let bitmap = page.render_with_config(&config).map_err(thumbnail_err)?;
        let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
        let surface = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes())
            .ok_or_else(|| GalleryError::Thumbnail("bitmap size mismatch".to_string()))?;
        Ok(RasterPage::new(surface, width_pt, height_pt))
    }

    #[async_trait]
    impl PdfRenderer for PdfiumRenderer {
        async fn first_page(&self, url: &str) -> GalleryResult<Box<dyn super::PdfPage>> {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let bytes = response.bytes().await?.to_vec();
            let page = tokio::task::spawn_blocking(move || rasterize_first_page(&bytes))
                .await
                .map_err(thumbnail_err)??;
            Ok(Box::new(page))
        }
    }
}
