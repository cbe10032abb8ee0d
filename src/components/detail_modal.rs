//! Detail Modal Component
//!
//! Overlay showing one resource in full, with inline description editing.
//! The overlay fades in and out through [`Overlay`]'s phases; the page
//! owns both signals so cards can open it.

use dioxus::prelude::*;
use gallery_core::{DetailContent, DetailView, Overlay, OverlayPhase};
use gallery_ui::{Button, ButtonVariant, CloseButton, Spinner, TextArea};

use crate::context::{use_config, use_gallery};

#[component]
pub fn DetailModal(mut overlay: Signal<Overlay>, mut detail: Signal<Option<DetailView>>) -> Element {
    let config = use_config();

    // Unhidden on the previous render; now let the fade-in run
    use_effect(move || {
        if overlay().phase() == OverlayPhase::Opening {
            overlay.write().activate();
        }
    });

    let mut close = move || {
        let Some(generation) = overlay.write().close() else {
            return;
        };
        let delay = config.read().overlay_close();
        spawn(async move {
            tokio::time::sleep(delay).await;
            overlay.write().finish_close(generation);
            if !overlay.read().is_visible() {
                detail.set(None);
            }
        });
    };

    let class = overlay.read().css_class();
    let Some(view) = detail() else {
        return rsx! {
            div { class: "{class}" }
        };
    };

    rsx! {
        div { class: "{class}", onclick: move |_| close(),
            div {
                class: "detail-modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: move |_| close() }

                div { class: "detail-media",
                    DetailMedia { content: view.content.clone(), title: view.title.clone() }
                }

                h2 { class: "detail-title", "{view.title}" }

                DescriptionBlock { detail }

                p { class: "detail-date", "{view.date_label()}" }
            }
        }
    }
}

/// Main content block, one branch per kind
#[component]
fn DetailMedia(content: DetailContent, title: String) -> Element {
    let gallery = use_gallery();
    let target = gallery.read().resolve_url(content.target());

    match content {
        DetailContent::Image { .. } => rsx! {
            img { src: "{target}", alt: "{title}" }
        },
        DetailContent::Frame { .. } => rsx! {
            iframe { src: "{target}", title: "{title}" }
        },
        DetailContent::VideoEmbed { .. } => rsx! {
            iframe {
                src: "{target}",
                title: "{title}",
                allow: "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        },
        DetailContent::Visit { .. } => rsx! {
            div { class: "detail-link",
                span { class: "card-icon link-type", "\u{1F517}" }
                a { class: "btn-primary", href: "{target}", target: "_blank", rel: "noopener", "Visit link" }
            }
        },
        DetailContent::Download { .. } => rsx! {
            div { class: "detail-link",
                span { class: "card-icon doc-type", "\u{1F4C4}" }
                a { class: "btn-primary", href: "{target}", download: "", "Download" }
            }
        },
    }
}

/// Read-only description with an edit toggle, or the editable draft
#[component]
fn DescriptionBlock(mut detail: Signal<Option<DetailView>>) -> Element {
    let gallery = use_gallery();

    let save = move |_: ()| {
        let Some((id, text)) = detail
            .write()
            .as_mut()
            .and_then(|view| view.editor.begin_save().map(|text| (view.id, text)))
        else {
            return;
        };

        spawn(async move {
            let gallery = gallery();
            let saved = gallery.update_description(id, &text).await.is_ok();
            if let Some(view) = detail.write().as_mut().filter(|view| view.id == id) {
                view.editor.finish_save(saved);
            }
        });
    };

    let Some(view) = detail() else {
        return rsx! {};
    };
    let editor = view.editor;

    if let Some(draft) = editor.draft() {
        let busy = editor.is_busy();
        return rsx! {
            TextArea {
                value: draft.to_string(),
                oninput: move |s: String| {
                    if let Some(view) = detail.write().as_mut() {
                        view.editor.set_draft(s);
                    }
                },
                disabled: busy,
                rows: 4,
            }
            div { class: "detail-actions",
                Button { disabled: busy, onclick: save,
                    if busy {
                        Spinner {}
                    } else {
                        "Save"
                    }
                }
            }
        };
    }

    let text = editor.text().to_string();
    rsx! {
        if text.is_empty() {
            p { class: "detail-description empty", "No description" }
        } else {
            p { class: "detail-description", "{text}" }
        }
        div { class: "detail-actions",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_: ()| {
                    if let Some(view) = detail.write().as_mut() {
                        view.editor.begin_edit();
                    }
                },
                "Edit"
            }
        }
    }
}
