//! Shared fakes for controller tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gallery_core::{
    DeleteResponse, GalleryBackend, GalleryConfig, GalleryController, GalleryError, GalleryEvent,
    GalleryResult, PdfPage, PdfRenderer, Resource, ResourceId, ResourceKind, UploadForm,
    UploadSource, UserPrompt, Viewport,
};
use image::{Rgba, RgbaImage};
use tokio::sync::broadcast;

// ============================================================================
// Backend
// ============================================================================

/// In-memory server that behaves like the real one
#[derive(Default)]
pub struct FakeBackend {
    pub resources: Mutex<Vec<Resource>>,
    pub calls: Mutex<Vec<String>>,
    /// Status code returned by every request while set
    pub fail_status: Mutex<Option<u16>>,
    /// Every request fails before reaching the server while set
    offline: AtomicBool,
    next_id: AtomicUsize,
}

impl FakeBackend {
    pub fn with(resources: Vec<Resource>) -> Arc<Self> {
        let next = resources.iter().map(|r| r.id.0).max().unwrap_or(0) as usize + 1;
        let backend = Self::default();
        *backend.resources.lock().unwrap() = resources;
        backend.next_id.store(next, Ordering::SeqCst);
        Arc::new(backend)
    }

    pub fn fail_with(&self, status: u16) {
        *self.fail_status.lock().unwrap() = Some(status);
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> GalleryResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(transport_error());
        }
        match *self.fail_status.lock().unwrap() {
            Some(status) => Err(GalleryError::Status {
                status,
                body: String::new(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GalleryBackend for FakeBackend {
    async fn list(&self) -> GalleryResult<Vec<Resource>> {
        self.record("list".to_string())?;
        Ok(self.resources.lock().unwrap().clone())
    }

    async fn upload(&self, form: &UploadForm) -> GalleryResult<()> {
        self.record(format!("upload {}", form.mode.wire_name()))?;
        let (kind, content) = match form.source()? {
            UploadSource::Url(url) => (ResourceKind::Link, url.to_string()),
            UploadSource::File(file) => {
                let ext = file.file_name.rsplit('.').next().unwrap_or("");
                let kind = match ext {
                    "png" | "jpg" | "jpeg" | "gif" | "webp" => ResourceKind::Image,
                    "pdf" => ResourceKind::Pdf,
                    _ => ResourceKind::Document,
                };
                (kind, format!("/static/uploads/{}", file.file_name))
            }
        };
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        let resource = Resource::new(id, form.title.clone(), kind, content)
            .with_description(form.description.clone())
            .with_date("01/02/2025");
        self.resources.lock().unwrap().push(resource);
        Ok(())
    }

    async fn delete(&self, id: ResourceId) -> GalleryResult<DeleteResponse> {
        self.record(format!("delete {id}"))?;
        let mut resources = self.resources.lock().unwrap();
        match resources.iter().position(|r| r.id == id) {
            Some(index) => {
                resources.remove(index);
                Ok(DeleteResponse::ok())
            }
            None => Ok(DeleteResponse::failed("Archivo no encontrado")),
        }
    }

    async fn update_description(&self, id: ResourceId, description: &str) -> GalleryResult<()> {
        self.record(format!("update {id}"))?;
        if let Some(r) = self.resources.lock().unwrap().iter_mut().find(|r| r.id == id) {
            r.description = description.to_string();
        }
        Ok(())
    }
}

/// A genuine reqwest error, produced without touching the network
fn transport_error() -> GalleryError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative URL must not build");
    GalleryError::Transport(err)
}

// ============================================================================
// Prompt
// ============================================================================

pub struct RecordingPrompt {
    answer: AtomicBool,
    pub confirms: AtomicUsize,
    pub alerts: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer: AtomicBool::new(answer),
            confirms: AtomicUsize::new(0),
            alerts: Mutex::new(Vec::new()),
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPrompt for RecordingPrompt {
    async fn confirm(&self, _message: &str) -> bool {
        self.confirms.fetch_add(1, Ordering::SeqCst);
        self.answer.load(Ordering::SeqCst)
    }

    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

// ============================================================================
// PDF renderer
// ============================================================================

struct BlankPage;

impl PdfPage for BlankPage {
    fn viewport(&self, scale: f32) -> Viewport {
        Viewport::from_points(20.0, 30.0, scale)
    }

    fn render(&self, viewport: &Viewport) -> GalleryResult<RgbaImage> {
        Ok(RgbaImage::from_pixel(
            viewport.width,
            viewport.height,
            Rgba([255, 255, 255, 255]),
        ))
    }
}

/// Renders a blank page, or fails for URLs containing "broken"
pub struct StubRenderer {
    pub requested: Mutex<Vec<String>>,
}

impl StubRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requested: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PdfRenderer for StubRenderer {
    async fn first_page(&self, url: &str) -> GalleryResult<Box<dyn PdfPage>> {
        self.requested.lock().unwrap().push(url.to_string());
        if url.contains("broken") {
            return Err(GalleryError::Thumbnail("corrupt document".to_string()));
        }
        Ok(Box::new(BlankPage))
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn instant_config() -> GalleryConfig {
    GalleryConfig {
        removal_transition_ms: 0,
        ..GalleryConfig::default()
    }
}

pub fn controller(backend: Arc<FakeBackend>, prompt: Arc<RecordingPrompt>) -> GalleryController {
    GalleryController::new(backend, prompt).with_config(&instant_config())
}

pub fn cat_and_video() -> Vec<Resource> {
    vec![
        Resource::new(1, "Cat.png", ResourceKind::Image, "/static/uploads/cat.png")
            .with_date("03/01/2025"),
        Resource::new(2, "My Video", ResourceKind::Link, "https://youtu.be/abc123")
            .with_date("04/01/2025"),
    ]
}

/// Wait for the first event matching `pred`
pub async fn wait_for(
    rx: &mut broadcast::Receiver<GalleryEvent>,
    pred: impl Fn(&GalleryEvent) -> bool,
) -> GalleryEvent {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Ok(event) if pred(&event) => return event,
                Ok(_) => continue,
                Err(e) => panic!("event channel closed: {e}"),
            }
        }
    })
    .await
    .expect("timed out waiting for event")
}
