//! Gallery controller - the primary entry point of the core crate
//!
//! `GalleryController` coordinates the backend, the card list, the active
//! filter and PDF thumbnail jobs:
//!
//! ```text
//! load_all ──▶ GET /api/files ──▶ CardList (newest first) ──▶ thumbnail jobs
//!                                        │
//! delete / update / upload ──▶ backend ──┤──▶ GalleryEvent broadcast ──▶ UI
//!                                        │
//! set_filter ─────────────────────────▶ Filter ──▶ visible_cards()
//! ```
//!
//! Every failure is terminal for that attempt: nothing is retried. State
//! locks are never held across a request.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gallery_core::{AutoConfirm, GalleryController, HttpBackend};
//!
//! let backend = Arc::new(HttpBackend::new("http://127.0.0.1:5000")?);
//! let controller = GalleryController::new(backend, Arc::new(AutoConfirm));
//! controller.load_all().await?;
//! for card in controller.visible_cards() {
//!     println!("[{}] {}", card.tag(), card.title());
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::backend::GalleryBackend;
use crate::card::{Card, CardList, CardPhase, ThumbnailState};
use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::events::GalleryEvent;
use crate::filter::Filter;
use crate::prompt::UserPrompt;
use crate::resource::{Resource, ResourceId};
use crate::thumbnail::{render_thumbnail, NoPdfRenderer, PdfRenderer, DEFAULT_THUMBNAIL_SCALE};
use crate::upload::UploadForm;

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

pub const CONFIRM_DELETE: &str = "Are you sure you want to permanently delete this resource?";
pub const ALERT_CONNECTION: &str = "Connection error";
pub const ALERT_UPLOAD_FAILED: &str = "Upload failed";
pub const ALERT_SAVE_FAILED: &str = "Could not save changes";

/// Result of a delete request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; no request was sent
    Cancelled,
    Deleted,
}

#[derive(Clone)]
pub struct GalleryController {
    backend: Arc<dyn GalleryBackend>,
    prompt: Arc<dyn UserPrompt>,
    renderer: Arc<dyn PdfRenderer>,
    cards: Arc<RwLock<CardList>>,
    filter: Arc<RwLock<Filter>>,
    events: broadcast::Sender<GalleryEvent>,
    thumbnail_scale: f32,
    removal_transition: Duration,
}

impl GalleryController {
    pub fn new(backend: Arc<dyn GalleryBackend>, prompt: Arc<dyn UserPrompt>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend,
            prompt,
            renderer: Arc::new(NoPdfRenderer),
            cards: Arc::new(RwLock::new(CardList::new())),
            filter: Arc::new(RwLock::new(Filter::default())),
            events,
            thumbnail_scale: DEFAULT_THUMBNAIL_SCALE,
            removal_transition: GalleryConfig::default().removal_transition(),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn PdfRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_config(mut self, config: &GalleryConfig) -> Self {
        self.thumbnail_scale = config.thumbnail_scale;
        self.removal_transition = config.removal_transition();
        self
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GalleryEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: GalleryEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }

    /// Turn a resource `content` value into a fetchable URL
    pub fn resolve_url(&self, content: &str) -> String {
        self.backend.resolve_url(content)
    }

    // ========================================================================
    // Reading state
    // ========================================================================

    /// All cards, in display order
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.read().iter().cloned().collect()
    }

    /// Cards matching the active filter, in display order
    pub fn visible_cards(&self) -> Vec<Card> {
        let filter = self.filter.read().clone();
        self.cards
            .read()
            .iter()
            .filter(|card| filter.matches_card(card))
            .cloned()
            .collect()
    }

    pub fn resource(&self, id: ResourceId) -> Option<Resource> {
        self.cards.read().get(id).map(|card| card.resource.clone())
    }

    pub fn filter(&self) -> Filter {
        self.filter.read().clone()
    }

    pub fn set_filter(&self, filter: Filter) {
        *self.filter.write() = filter;
        self.emit(GalleryEvent::FilterChanged);
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replace the gallery with the backend's current collection.
    ///
    /// Failures are logged and leave the gallery empty; the error is returned
    /// for callers that care, but nothing is shown to the user.
    pub async fn load_all(&self) -> GalleryResult<usize> {
        self.cards.write().clear();

        let resources = match self.backend.list().await {
            Ok(resources) => resources,
            Err(e) => {
                error!("Failed to load resources: {}", e);
                self.emit(GalleryEvent::Reloaded { count: 0 });
                return Err(e);
            }
        };

        let list = CardList::from_resources(resources);
        let pending: Vec<(ResourceId, String)> = list
            .iter()
            .filter(|card| card.needs_thumbnail())
            .map(|card| (card.id(), card.resource.content.clone()))
            .collect();
        let count = list.len();
        *self.cards.write() = list;

        info!(count, thumbnails = pending.len(), "Gallery loaded");
        self.emit(GalleryEvent::Reloaded { count });

        // Cards are committed before any job starts
        for (id, content) in pending {
            self.spawn_thumbnail(id, content);
        }
        Ok(count)
    }

    fn spawn_thumbnail(&self, id: ResourceId, content: String) {
        let controller = self.clone();
        tokio::spawn(async move {
            let url = controller.resolve_url(&content);
            let scale = controller.thumbnail_scale;
            let state = match render_thumbnail(controller.renderer.as_ref(), &url, scale).await {
                Ok(data_url) => ThumbnailState::Ready(data_url),
                Err(e) => {
                    warn!(%id, "Could not generate PDF preview: {}", e);
                    ThumbnailState::Failed
                }
            };
            let ok = matches!(state, ThumbnailState::Ready(_));
            let stored = controller.cards.write().set_thumbnail(id, state);
            if stored {
                controller.emit(GalleryEvent::ThumbnailFinished { id, ok });
            } else {
                debug!(%id, "Dropping thumbnail for card no longer on display");
            }
        });
    }

    /// Send the upload form. On success the gallery is reloaded; on failure
    /// the user is alerted and the form is left for the caller to retry.
    pub async fn submit_upload(&self, form: &UploadForm) -> GalleryResult<()> {
        match self.backend.upload(form).await {
            Ok(()) => {
                info!(title = %form.title, mode = form.mode.wire_name(), "Uploaded resource");
                // Load failures are already logged
                let _ = self.load_all().await;
                Ok(())
            }
            Err(e) => {
                error!("Upload failed: {}", e);
                let message = if e.is_transport() {
                    ALERT_CONNECTION.to_string()
                } else if matches!(e, GalleryError::MissingUploadSource) {
                    format!("{ALERT_UPLOAD_FAILED}: {e}")
                } else {
                    ALERT_UPLOAD_FAILED.to_string()
                };
                self.prompt.alert(&message).await;
                Err(e)
            }
        }
    }

    /// Confirm, delete on the backend, then fade out and detach the card.
    pub async fn delete_resource(&self, id: ResourceId) -> GalleryResult<DeleteOutcome> {
        if !self.prompt.confirm(CONFIRM_DELETE).await {
            debug!(%id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let reply = match self.backend.delete(id).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(%id, "Delete failed: {}", e);
                let message = match &e {
                    GalleryError::Transport(_) => ALERT_CONNECTION.to_string(),
                    other => format!("Delete failed: {other}"),
                };
                self.prompt.alert(&message).await;
                return Err(e);
            }
        };

        if !reply.success {
            let reason = reply.error.unwrap_or_else(|| "unknown error".to_string());
            warn!(%id, "Backend refused delete: {}", reason);
            self.prompt.alert(&format!("Delete failed: {reason}")).await;
            return Err(GalleryError::Rejected(reason));
        }

        let marked = self.cards.write().set_phase(id, CardPhase::Removing);
        if marked {
            self.emit(GalleryEvent::CardRemoving { id });
            if !self.removal_transition.is_zero() {
                tokio::time::sleep(self.removal_transition).await;
            }
        }
        self.cards.write().remove(id);
        info!(%id, "Deleted resource");
        self.emit(GalleryEvent::CardRemoved { id });
        Ok(DeleteOutcome::Deleted)
    }

    /// Save a new description. On failure the user is alerted and the error
    /// is returned so the caller can stay in edit mode.
    pub async fn update_description(&self, id: ResourceId, text: &str) -> GalleryResult<()> {
        if let Err(e) = self.backend.update_description(id, text).await {
            error!(%id, "Update failed: {}", e);
            let message = if e.is_transport() {
                ALERT_CONNECTION
            } else {
                ALERT_SAVE_FAILED
            };
            self.prompt.alert(message).await;
            return Err(e);
        }

        let cached = self.cards.write().set_description(id, text);
        if !cached {
            debug!(%id, "Updated resource is no longer on display");
        }
        self.emit(GalleryEvent::DescriptionUpdated { id });
        Ok(())
    }
}

impl std::fmt::Debug for GalleryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryController")
            .field("cards", &self.cards.read().len())
            .field("filter", &*self.filter.read())
            .finish_non_exhaustive()
    }
}
