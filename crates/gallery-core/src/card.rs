//! Card renderer model
//!
//! Turns a [`Resource`] into the compact card shown in the gallery grid and
//! keeps the ordered list of cards currently on display.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │  preview (image / thumbnail)  │   Image → content
//! │  ┌──┐                         │   Pdf   → rasterized page one
//! │  │ic│  Title                  │   Link  → none
//! │  └──┘  [TAG]            [del] │   Doc   → none
//! └───────────────────────────────┘
//! ```

use crate::resource::{Resource, ResourceId, ResourceKind};

/// Opacity applied to a generated PDF thumbnail
pub const PDF_THUMBNAIL_OPACITY: f32 = 0.6;

/// State of a deferred PDF thumbnail
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbnailState {
    /// Job scheduled or running; preview is transparent
    Pending,
    /// PNG data URL ready to display
    Ready(String),
    /// Generation failed; the card stays blank
    Failed,
}

/// Background preview of a card
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    None,
    Image(String),
    Thumbnail(ThumbnailState),
}

impl Preview {
    /// Source and opacity to paint, if anything should be painted yet.
    pub fn source(&self) -> Option<(&str, f32)> {
        match self {
            Preview::None => None,
            Preview::Image(src) => Some((src.as_str(), 1.0)),
            Preview::Thumbnail(ThumbnailState::Ready(src)) => {
                Some((src.as_str(), PDF_THUMBNAIL_OPACITY))
            }
            Preview::Thumbnail(_) => None,
        }
    }
}

/// Icon shown in the card corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Image,
    Pdf,
    Link,
    Document,
}

impl CardIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            CardIcon::Image => "🖼",
            CardIcon::Pdf => "📕",
            CardIcon::Link => "🔗",
            CardIcon::Document => "📄",
        }
    }

    /// CSS modifier used for the icon colour
    pub fn class(&self) -> &'static str {
        match self {
            CardIcon::Image => "img-type",
            CardIcon::Pdf => "pdf-type",
            CardIcon::Link => "link-type",
            CardIcon::Document => "doc-type",
        }
    }
}

/// Lifecycle of a card on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Present,
    /// Delete confirmed by the backend; fade/shrink transition running
    Removing,
}

/// One gallery card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub resource: Resource,
    pub preview: Preview,
    pub icon: CardIcon,
    pub phase: CardPhase,
}

impl Card {
    pub fn from_resource(resource: Resource) -> Self {
        let (preview, icon) = match resource.kind {
            ResourceKind::Image => (Preview::Image(resource.content.clone()), CardIcon::Image),
            ResourceKind::Pdf => (Preview::Thumbnail(ThumbnailState::Pending), CardIcon::Pdf),
            ResourceKind::Link => (Preview::None, CardIcon::Link),
            ResourceKind::Document => (Preview::None, CardIcon::Document),
        };
        Self {
            resource,
            preview,
            icon,
            phase: CardPhase::Present,
        }
    }

    pub fn id(&self) -> ResourceId {
        self.resource.id
    }

    pub fn title(&self) -> &str {
        &self.resource.title
    }

    pub fn kind(&self) -> ResourceKind {
        self.resource.kind
    }

    pub fn tag(&self) -> &'static str {
        self.resource.kind.tag()
    }

    /// Whether a thumbnail job should run for this card
    pub fn needs_thumbnail(&self) -> bool {
        matches!(self.preview, Preview::Thumbnail(ThumbnailState::Pending))
    }

    pub fn css_class(&self) -> &'static str {
        match self.phase {
            CardPhase::Present => "file-card",
            CardPhase::Removing => "file-card removing",
        }
    }
}

/// Cards in display order, most recently inserted first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from backend arrival order; each card goes to the front, so the
    /// last resource received is displayed first.
    pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut list = Self::new();
        for resource in resources {
            list.prepend(Card::from_resource(resource));
        }
        list
    }

    pub fn prepend(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn remove(&mut self, id: ResourceId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(index))
    }

    pub fn get(&self, id: ResourceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    fn get_mut(&mut self, id: ResourceId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Returns false if the card is gone.
    pub fn set_phase(&mut self, id: ResourceId, phase: CardPhase) -> bool {
        match self.get_mut(id) {
            Some(card) => {
                card.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Store a thumbnail result. Ignored unless the card is still a PDF card
    /// waiting for its thumbnail.
    pub fn set_thumbnail(&mut self, id: ResourceId, state: ThumbnailState) -> bool {
        match self.get_mut(id) {
            Some(card) if card.needs_thumbnail() => {
                card.preview = Preview::Thumbnail(state);
                true
            }
            _ => false,
        }
    }

    pub fn set_description(&mut self, id: ResourceId, description: &str) -> bool {
        match self.get_mut(id) {
            Some(card) => {
                card.resource.description = description.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(id: i64) -> Resource {
        Resource::new(id, "Report", ResourceKind::Pdf, "/static/uploads/r.pdf")
    }

    #[test]
    fn test_branch_per_kind() {
        let image = Card::from_resource(Resource::new(1, "Cat", ResourceKind::Image, "/cat.png"));
        assert_eq!(image.preview, Preview::Image("/cat.png".to_string()));
        assert_eq!(image.icon, CardIcon::Image);
        assert_eq!(image.tag(), "IMG");

        let pdf = Card::from_resource(pdf(2));
        assert!(pdf.needs_thumbnail());
        assert_eq!(pdf.preview.source(), None);
        assert_eq!(pdf.tag(), "PDF");

        let link = Card::from_resource(Resource::new(3, "V", ResourceKind::Link, "https://x"));
        assert_eq!(link.preview, Preview::None);
        assert_eq!(link.tag(), "URL");

        let doc = Card::from_resource(Resource::new(4, "D", ResourceKind::Document, "/d.txt"));
        assert_eq!(doc.icon, CardIcon::Document);
        assert_eq!(doc.tag(), "DOC");
    }

    #[test]
    fn test_arrival_order_is_reversed() {
        let list = CardList::from_resources(vec![
            Resource::new(1, "first", ResourceKind::Link, "a"),
            Resource::new(2, "second", ResourceKind::Link, "b"),
            Resource::new(3, "third", ResourceKind::Link, "c"),
        ]);
        let ids: Vec<_> = list.iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_thumbnail_ready_uses_reduced_opacity() {
        let mut list = CardList::from_resources(vec![pdf(5)]);
        assert!(list.set_thumbnail(ResourceId(5), ThumbnailState::Ready("data:x".into())));
        let card = list.get(ResourceId(5)).unwrap();
        assert_eq!(card.preview.source(), Some(("data:x", PDF_THUMBNAIL_OPACITY)));

        // Second result for the same card is ignored
        assert!(!list.set_thumbnail(ResourceId(5), ThumbnailState::Failed));
    }

    #[test]
    fn test_thumbnail_for_missing_card_is_dropped() {
        let mut list = CardList::new();
        assert!(!list.set_thumbnail(ResourceId(1), ThumbnailState::Failed));
    }

    #[test]
    fn test_remove_only_touches_target() {
        let mut list = CardList::from_resources(vec![pdf(1), pdf(2), pdf(3)]);
        assert!(list.remove(ResourceId(2)).is_some());
        let ids: Vec<_> = list.iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(list.remove(ResourceId(2)).is_none());
    }

    #[test]
    fn test_removing_phase_class() {
        let mut list = CardList::from_resources(vec![pdf(1)]);
        list.set_phase(ResourceId(1), CardPhase::Removing);
        assert_eq!(list.get(ResourceId(1)).unwrap().css_class(), "file-card removing");
    }
}
