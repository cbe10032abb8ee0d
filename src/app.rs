use dioxus::prelude::*;
use gallery_core::{GalleryConfig, GalleryController};

use crate::pages::Gallery;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The gallery: upload form, filters, cards and detail overlay
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
}

/// Root application component.
///
/// Provides global styles, the gallery context, and routing.
#[component]
pub fn App() -> Element {
    // Both are handed over by the launcher in main
    let controller = use_context::<GalleryController>();
    let config = use_context::<GalleryConfig>();

    use_context_provider(|| Signal::new(controller));
    use_context_provider(|| Signal::new(config));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
