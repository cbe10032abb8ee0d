//! Media Gallery UI Components
//!
//! Reusable Dioxus widgets shared by the gallery pages: buttons, text
//! inputs and the filter controls. Styling lives in the desktop app's
//! global stylesheet; these components only emit class names.

pub mod components;

pub use components::*;
