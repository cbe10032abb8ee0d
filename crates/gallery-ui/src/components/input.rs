//! Input Field Components
//!
//! Text inputs, textareas and the search box used by the upload form,
//! the description editor and the filter bar.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, url, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// let mut title = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: title(),
///         oninput: move |s| title.set(s),
///         label: "Title".to_string(),
///         required: true
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_field_id("input");

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { for_id: id.clone(), label: label.clone(), hint: None }
            }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint after the label (e.g. "optional")
    #[props(default)]
    pub hint: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = use_field_id("textarea");

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { for_id: id.clone(), label: label.clone(), hint: props.hint.clone() }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[component]
fn FieldLabel(for_id: String, label: String, hint: Option<String>) -> Element {
    rsx! {
        label { class: "input-label", r#for: "{for_id}",
            "{label}"
            if let Some(hint) = hint {
                span { class: "input-hint", " ({hint})" }
            }
        }
    }
}

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "Search by title...".to_string())]
    pub placeholder: String,
}

/// Search box that reports every keystroke
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field",
                r#type: "search",
                "aria-label": "Search",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique element id for label association
fn next_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Element id allocated on first render and kept for the component's lifetime
fn use_field_id(prefix: &'static str) -> String {
    use_hook(|| next_id(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = next_id("input");
        let b = next_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }

    thread_local! {
        static SEEN: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    fn field() -> Element {
        let id = use_field_id("input");
        SEEN.with(|seen| seen.borrow_mut().push(id));
        rsx! { div {} }
    }

    #[test]
    fn field_id_survives_rerender() {
        let mut dom = VirtualDom::new(field);
        dom.rebuild_in_place();
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate_to_vec();

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }
}
