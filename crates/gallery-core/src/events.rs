//! Notifications broadcast by the gallery controller.
//!
//! The UI re-reads a snapshot whenever one of these arrives.

use crate::resource::ResourceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// The card list was rebuilt from the backend (zero cards on failure)
    Reloaded { count: usize },
    /// Delete confirmed; the card is fading out
    CardRemoving { id: ResourceId },
    /// Card detached from the list
    CardRemoved { id: ResourceId },
    /// Description saved on the backend and in the local copy
    DescriptionUpdated { id: ResourceId },
    /// A PDF thumbnail finished (successfully or not)
    ThumbnailFinished { id: ResourceId, ok: bool },
    FilterChanged,
}

impl GalleryEvent {
    /// Resource the event concerns, if any
    pub fn resource_id(&self) -> Option<ResourceId> {
        match self {
            GalleryEvent::CardRemoving { id }
            | GalleryEvent::CardRemoved { id }
            | GalleryEvent::DescriptionUpdated { id }
            | GalleryEvent::ThumbnailFinished { id, .. } => Some(*id),
            GalleryEvent::Reloaded { .. } | GalleryEvent::FilterChanged => None,
        }
    }
}
