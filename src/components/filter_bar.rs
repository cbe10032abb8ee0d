//! Filter Bar Component
//!
//! Search box and category selector. Every change replaces the
//! controller's active filter.

use dioxus::prelude::*;
use gallery_core::{Category, Filter};
use gallery_ui::{CategorySelect, SearchInput};

use crate::context::use_gallery;

#[component]
pub fn FilterBar() -> Element {
    let gallery = use_gallery();
    let mut query = use_signal(String::new);
    let mut category = use_signal(Category::default);

    let apply = move || {
        gallery.read().set_filter(Filter::new(query(), category()));
    };

    rsx! {
        div { class: "filter-bar",
            SearchInput {
                value: query(),
                oninput: move |s| {
                    query.set(s);
                    apply();
                },
            }
            CategorySelect {
                selected: category(),
                on_select: move |c| {
                    category.set(c);
                    apply();
                },
            }
        }
    }
}
