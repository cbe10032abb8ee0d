//! Detail view model
//!
//! The expanded, single-resource presentation shown in an overlay:
//! type-specific content, the title, an editable description and the date.
//!
//! ## State machines
//!
//! ```text
//! DescriptionEditor                    Overlay
//! ─────────────────                    ───────
//! Viewing ──begin_edit──▶ Editing      Hidden ──open──▶ Opening
//!    ▲                      │  ▲                          │ activate (after one render)
//!    │ finish_save(Ok)      │  │ finish_save(Err)         ▼
//!    │                 begin_save                        Open
//!    └──────── Saving ◀─────┘  │                          │ close
//!                 └────────────┘                          ▼
//!                                    Hidden ◀─finish_close─ Closing
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::resource::{Resource, ResourceId, ResourceKind};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

static YOUTUBE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:.*v=|.*/))([^&?]*)")
        .expect("youtube pattern should compile")
});

/// Extract a YouTube video id from `youtu.be/<id>`, `youtube.com/...v=<id>`
/// or `youtube.com/.../<id>` URLs.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
}

/// Main content block of the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// Full-size image
    Image { src: String },
    /// Inline document frame
    Frame { src: String },
    /// Playable video frame
    VideoEmbed { id: String, embed_url: String },
    /// Outbound link opened in a new browsing context
    Visit { href: String },
    /// Generic document with a download action
    Download { href: String },
}

impl DetailContent {
    pub fn for_resource(resource: &Resource) -> Self {
        let content = resource.content.clone();
        match resource.kind {
            ResourceKind::Image => DetailContent::Image { src: content },
            ResourceKind::Pdf => DetailContent::Frame { src: content },
            ResourceKind::Link => match youtube_id(&content) {
                Some(id) => DetailContent::VideoEmbed {
                    id: id.to_string(),
                    embed_url: format!("{YOUTUBE_EMBED_BASE}{id}"),
                },
                None => DetailContent::Visit { href: content },
            },
            ResourceKind::Document => DetailContent::Download { href: content },
        }
    }

    /// Short name of the action, used by the command-line client
    pub fn action(&self) -> &'static str {
        match self {
            DetailContent::Image { .. } => "image",
            DetailContent::Frame { .. } => "frame",
            DetailContent::VideoEmbed { .. } => "embed",
            DetailContent::Visit { .. } => "visit",
            DetailContent::Download { .. } => "download",
        }
    }

    /// URL the content block points at
    pub fn target(&self) -> &str {
        match self {
            DetailContent::Image { src } | DetailContent::Frame { src } => src,
            DetailContent::VideoEmbed { embed_url, .. } => embed_url,
            DetailContent::Visit { href } | DetailContent::Download { href } => href,
        }
    }
}

/// Inline description editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing { draft: String },
    Saving { draft: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionEditor {
    text: String,
    state: EditorState,
}

impl DescriptionEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: EditorState::Viewing,
        }
    }

    /// Last saved text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.state, EditorState::Viewing)
    }

    /// Save control shows a spinner
    pub fn is_busy(&self) -> bool {
        matches!(self.state, EditorState::Saving { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditorState::Viewing => None,
            EditorState::Editing { draft } | EditorState::Saving { draft } => Some(draft),
        }
    }

    /// Switch to the editable input, pre-filled with the current text.
    pub fn begin_edit(&mut self) {
        if let EditorState::Viewing = self.state {
            self.state = EditorState::Editing {
                draft: self.text.clone(),
            };
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditorState::Editing { draft } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Enter the in-flight state and hand back the text to send.
    /// Returns `None` unless currently editing.
    pub fn begin_save(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.state, EditorState::Viewing) {
            EditorState::Editing { draft } => {
                self.state = EditorState::Saving {
                    draft: draft.clone(),
                };
                Some(draft)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Apply the outcome of the update request. Success shows the new text
    /// read-only; failure keeps the editor open with the draft.
    pub fn finish_save(&mut self, saved: bool) {
        if let EditorState::Saving { draft } = std::mem::replace(&mut self.state, EditorState::Viewing)
        {
            if saved {
                self.text = draft;
            } else {
                self.state = EditorState::Editing { draft };
            }
        }
    }
}

/// Everything the overlay shows for one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ResourceId,
    pub title: String,
    pub date: String,
    pub content: DetailContent,
    pub editor: DescriptionEditor,
}

impl DetailView {
    pub fn new(resource: &Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title.clone(),
            date: resource.date.clone(),
            content: DetailContent::for_resource(resource),
            editor: DescriptionEditor::new(resource.description.clone()),
        }
    }

    pub fn date_label(&self) -> String {
        format!("Added on {}", self.date)
    }
}

/// Phase of the overlay's open/close transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    /// Unhidden but not yet active; becomes active after one render
    Opening,
    Open,
    /// Active class removed; hidden once the close transition ends
    Closing,
}

/// Two-phase overlay visibility.
///
/// Every `open` or `close` bumps a generation counter so that a delayed
/// `finish_close` from an earlier close cannot hide a re-opened overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    phase: OverlayPhase,
    generation: u64,
}

impl Overlay {
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }

    pub fn open(&mut self) -> u64 {
        self.phase = OverlayPhase::Opening;
        self.generation += 1;
        self.generation
    }

    /// Called once the unhidden overlay has been rendered.
    pub fn activate(&mut self) {
        if self.phase == OverlayPhase::Opening {
            self.phase = OverlayPhase::Open;
        }
    }

    /// Start closing; returns the generation to pass to `finish_close`.
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            OverlayPhase::Open | OverlayPhase::Opening => {
                self.phase = OverlayPhase::Closing;
                self.generation += 1;
                Some(self.generation)
            }
            _ => None,
        }
    }

    pub fn finish_close(&mut self, generation: u64) {
        if self.phase == OverlayPhase::Closing && self.generation == generation {
            self.phase = OverlayPhase::Hidden;
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.phase {
            OverlayPhase::Hidden => "modal-overlay hidden",
            OverlayPhase::Opening | OverlayPhase::Closing => "modal-overlay",
            OverlayPhase::Open => "modal-overlay active",
        }
    }
}
