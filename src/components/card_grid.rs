//! Card Grid Component
//!
//! Responsive grid of [`ResourceCard`]s in display order.

use dioxus::prelude::*;
use gallery_core::{Card, ResourceId};

use super::ResourceCard;

#[component]
pub fn CardGrid(
    cards: Vec<Card>,
    on_open: EventHandler<ResourceId>,
    on_delete: EventHandler<ResourceId>,
    /// True until the first load finishes
    #[props(default = false)]
    loading: bool,
) -> Element {
    if loading {
        return rsx! {
            div { class: "card-grid-empty", "Loading..." }
        };
    }

    if cards.is_empty() {
        return rsx! {
            div { class: "card-grid-empty", "Nothing here yet" }
        };
    }

    rsx! {
        div { class: "card-grid",
            for card in cards {
                ResourceCard {
                    key: "{card.id()}",
                    card: card.clone(),
                    on_open: on_open,
                    on_delete: on_delete,
                }
            }
        }
    }
}
