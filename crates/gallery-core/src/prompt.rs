//! Blocking user dialogs.
//!
//! The controller asks before destructive actions and reports failures
//! through this trait; the desktop app shows native message boxes, the
//! command-line client reads from the terminal.

use async_trait::async_trait;
use tracing::warn;

#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question. `true` means go ahead.
    async fn confirm(&self, message: &str) -> bool;

    /// Show an error the user must acknowledge.
    async fn alert(&self, message: &str);
}

/// Accepts every confirmation and logs alerts instead of showing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl UserPrompt for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }

    async fn alert(&self, message: &str) {
        warn!("{}", message);
    }
}
