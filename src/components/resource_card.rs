//! Resource Card Component
//!
//! Compact card for one resource: preview, kind icon, title, tag and a
//! delete control.

use dioxus::prelude::*;
use gallery_core::{Card, ResourceId};
use gallery_ui::DeleteButton;

use crate::context::use_gallery;

/// A single gallery card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ResourceCard {
///         card: card.clone(),
///         on_open: move |id| selected.set(Some(id)),
///         on_delete: move |id| delete(id),
///     }
/// }
/// ```
#[component]
pub fn ResourceCard(
    card: Card,
    /// Clicking anywhere on the card except the delete control
    on_open: EventHandler<ResourceId>,
    on_delete: EventHandler<ResourceId>,
) -> Element {
    let gallery = use_gallery();
    let id = card.id();
    let icon = card.icon;
    let preview = card
        .preview
        .source()
        .map(|(src, opacity)| (gallery.read().resolve_url(src), opacity));

    rsx! {
        div {
            class: "{card.css_class()}",
            "data-id": "{id}",
            onclick: move |_| on_open.call(id),

            div { class: "card-preview",
                if let Some((src, opacity)) = preview {
                    img { src: "{src}", style: "opacity: {opacity}", alt: "{card.title()}" }
                }
            }

            div { class: "card-body",
                span { class: "card-icon {icon.class()}", "{icon.glyph()}" }
                div { class: "card-text",
                    div { class: "card-title", title: "{card.title()}", "{card.title()}" }
                    div { class: "card-tag", "{card.tag()}" }
                }
                DeleteButton { onclick: move |_| on_delete.call(id) }
            }
        }
    }
}
