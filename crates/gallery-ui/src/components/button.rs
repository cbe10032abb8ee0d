//! Button Components
//!
//! - Primary: submit and save actions
//! - Ghost: secondary actions (cancel, edit)
//! - Toggle: one half of a two-way switch, see [`ToggleButton`]

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Toggle,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Toggle => "btn-toggle",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         disabled: uploading(),
///         onclick: move |_| submit(),
///         if uploading() { "Uploading..." } else { "Upload" }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, delete)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Icon button. The raw mouse event is forwarded so callers inside a
/// clickable card can stop propagation.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            onclick: move |e| props.onclick.call(e),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| onclick.call(()),
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

/// Delete button shown on a card. Clicks never reach the card itself.
#[component]
pub fn DeleteButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(());
            },
            aria_label: "Delete".to_string(),
            class: "delete-btn".to_string(),
            "\u{1F5D1}"
        }
    }
}

/// Properties for the ToggleButton component
#[derive(Clone, PartialEq, Props)]
pub struct ToggleButtonProps {
    pub label: String,
    #[props(default = false)]
    pub active: bool,
    pub on_click: EventHandler<()>,
}

/// One option of a two-way switch; the active side carries `active`
#[component]
pub fn ToggleButton(props: ToggleButtonProps) -> Element {
    let class = toggle_class(props.active);

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |_| props.on_click.call(()),
            "{props.label}"
        }
    }
}

fn toggle_class(active: bool) -> String {
    join_class(ButtonVariant::Toggle.class(), active.then_some("active"))
}

/// Small rotating indicator shown while a request is in flight
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", role: "status", "aria-label": "Saving" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Toggle.class(), "btn-toggle");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_class("icon-btn", None), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }

    #[test]
    fn toggle_marks_active_side() {
        assert_eq!(toggle_class(true), "btn-toggle active");
        assert_eq!(toggle_class(false), "btn-toggle");
    }
}
