//! Gallery page - upload form, filters, card grid and the detail overlay.
//!
//! Cards are re-read from the controller whenever it broadcasts an event,
//! so uploads, deletions, thumbnails and filter changes all land here the
//! same way.

use dioxus::prelude::*;
use gallery_core::{Card, DetailView, Overlay, ResourceId};
use tokio::sync::broadcast::error::RecvError;

use crate::components::{CardGrid, DetailModal, FilterBar, UploadPanel};
use crate::context::use_gallery;

#[component]
pub fn Gallery() -> Element {
    let gallery = use_gallery();
    let mut cards = use_signal(Vec::<Card>::new);
    let mut loading = use_signal(|| true);
    let mut overlay = use_signal(Overlay::default);
    let mut detail = use_signal(|| Option::<DetailView>::None);

    // Subscribe first so the initial Reloaded is not missed, then load
    use_effect(move || {
        let controller = gallery.peek().clone();
        let mut event_rx = controller.subscribe();

        let loader = controller.clone();
        spawn(async move {
            if let Err(e) = loader.load_all().await {
                tracing::debug!("Initial load failed: {}", e);
            }
            loading.set(false);
        });

        spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        tracing::trace!(?event, "Gallery event");
                        cards.set(controller.visible_cards());
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Missed {} gallery events; refreshing", skipped);
                        cards.set(controller.visible_cards());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    let open_detail = move |id: ResourceId| {
        let Some(resource) = gallery.read().resource(id) else {
            tracing::warn!("Card #{} is no longer loaded", id);
            return;
        };
        detail.set(Some(DetailView::new(&resource)));
        overlay.write().open();
    };

    let delete = move |id: ResourceId| {
        spawn(async move {
            let gallery = gallery();
            match gallery.delete_resource(id).await {
                Ok(outcome) => tracing::debug!("Delete #{}: {:?}", id, outcome),
                Err(e) => tracing::debug!("Delete #{} not completed: {}", id, e),
            }
        });
    };

    rsx! {
        main { class: "gallery-page",
            h1 { class: "page-title", "Media Gallery" }
            UploadPanel {}
            FilterBar {}
            CardGrid {
                cards: cards(),
                loading: loading(),
                on_open: open_detail,
                on_delete: delete,
            }
            DetailModal { overlay, detail }
        }
    }
}
