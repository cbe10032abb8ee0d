//! Upload Form Component
//!
//! Title, description and either a picked file or a URL, switched by a
//! two-way toggle.

use dioxus::prelude::*;
use gallery_core::{FilePayload, UploadForm, UploadMode};
use gallery_ui::{Button, ButtonVariant, Input, TextArea, ToggleButton};

use crate::context::use_gallery;
use crate::dialogs::pick_upload_file;

#[component]
pub fn UploadPanel() -> Element {
    let gallery = use_gallery();
    let mut form = use_signal(UploadForm::default);
    let mut uploading = use_signal(|| false);

    let choose_file = move |_: ()| {
        spawn(async move {
            let Some(path) = pick_upload_file().await else {
                return;
            };
            match FilePayload::read(&path).await {
                Ok(payload) => form.write().file = Some(payload),
                Err(e) => tracing::error!("Failed to read {:?}: {}", path, e),
            }
        });
    };

    let submit = move |_: ()| {
        if uploading() {
            return;
        }
        uploading.set(true);
        let pending = form();

        spawn(async move {
            let gallery = gallery();
            match gallery.submit_upload(&pending).await {
                Ok(()) => form.write().reset(),
                // The controller already alerted; keep the form populated
                Err(e) => tracing::debug!("Upload not completed: {}", e),
            }
            uploading.set(false);
        });
    };

    let mode = form.read().mode;
    let file_name = form
        .read()
        .file
        .as_ref()
        .map(|f| f.file_name.clone())
        .unwrap_or_else(|| "No file selected".to_string());

    rsx! {
        div { class: "upload-form",
            Input {
                value: form.read().title.clone(),
                oninput: move |s| form.write().title = s,
                label: "Title".to_string(),
                required: true,
            }
            TextArea {
                value: form.read().description.clone(),
                oninput: move |s| form.write().description = s,
                label: "Description".to_string(),
                hint: "optional".to_string(),
                rows: 3,
            }

            div { class: "upload-mode", role: "group", "aria-label": "Upload type",
                ToggleButton {
                    label: "File".to_string(),
                    active: mode == UploadMode::File,
                    on_click: move |_| form.write().mode = UploadMode::File,
                }
                ToggleButton {
                    label: "Link".to_string(),
                    active: mode == UploadMode::Link,
                    on_click: move |_| form.write().mode = UploadMode::Link,
                }
            }

            if mode == UploadMode::File {
                div { class: "file-picker",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: choose_file,
                        "Choose file"
                    }
                    span { class: "file-name", "{file_name}" }
                }
            } else {
                Input {
                    value: form.read().url.clone(),
                    oninput: move |s| form.write().url = s,
                    label: "URL".to_string(),
                    input_type: "url".to_string(),
                    placeholder: "https://".to_string(),
                }
            }

            Button {
                disabled: uploading(),
                onclick: submit,
                if uploading() { "Uploading..." } else { "Upload" }
            }
        }
    }
}
