//! Category Select Component
//!
//! Drop-down of the gallery categories used by the filter bar.

use dioxus::prelude::*;
use gallery_core::Category;

/// Properties for the CategorySelect component
#[derive(Clone, PartialEq, Props)]
pub struct CategorySelectProps {
    /// Currently selected category
    pub selected: Category,
    /// Handler called with the newly selected category
    pub on_select: EventHandler<Category>,
}

/// Category selector fed from [`Category::options`]
///
/// # Example
///
/// ```rust,ignore
/// let mut category = use_signal(Category::default);
///
/// rsx! {
///     CategorySelect {
///         selected: category(),
///         on_select: move |c| category.set(c)
///     }
/// }
/// ```
#[component]
pub fn CategorySelect(props: CategorySelectProps) -> Element {
    let current = props.selected.value();

    rsx! {
        select {
            class: "category-select",
            "aria-label": "Category",
            value: "{current}",
            onchange: move |e| props.on_select.call(Category::from(e.value().as_str())),
            for (value, label) in Category::options() {
                option {
                    key: "{value}",
                    value: "{value}",
                    selected: value == current,
                    "{label}"
                }
            }
        }
    }
}
