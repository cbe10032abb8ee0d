//! Native dialogs.
//!
//! rfd dialogs block the calling thread, so every one of them runs on
//! `spawn_blocking` and the UI stays responsive while it is open.

use std::path::PathBuf;

use async_trait::async_trait;
use gallery_core::UserPrompt;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

const DIALOG_TITLE: &str = "Media Gallery";

/// [`UserPrompt`] backed by native message boxes
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPrompt;

#[async_trait]
impl UserPrompt for DialogPrompt {
    async fn confirm(&self, message: &str) -> bool {
        let message = message.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            MessageDialog::new()
                .set_title(DIALOG_TITLE)
                .set_description(message)
                .set_level(MessageLevel::Warning)
                .set_buttons(MessageButtons::OkCancel)
                .show()
        })
        .await;

        match answer {
            Ok(result) => result == MessageDialogResult::Ok,
            Err(e) => {
                tracing::error!("Confirmation dialog failed: {}", e);
                false
            }
        }
    }

    async fn alert(&self, message: &str) {
        let message = message.to_string();
        let shown = tokio::task::spawn_blocking(move || {
            MessageDialog::new()
                .set_title(DIALOG_TITLE)
                .set_description(message)
                .set_level(MessageLevel::Error)
                .set_buttons(MessageButtons::Ok)
                .show()
        })
        .await;

        if let Err(e) = shown {
            tracing::error!("Alert dialog failed: {}", e);
        }
    }
}

/// Let the user choose the file to upload. `None` when cancelled.
pub async fn pick_upload_file() -> Option<PathBuf> {
    match tokio::task::spawn_blocking(|| FileDialog::new().set_title("Select File").pick_file())
        .await
    {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("File picker error: {}", e);
            None
        }
    }
}
