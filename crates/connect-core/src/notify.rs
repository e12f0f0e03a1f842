//! Clipboard copy with a transient toast.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// Message shown when the caller does not supply one.
pub const DEFAULT_COPY_MESSAGE: &str = "Copied to clipboard!";

/// System clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Renders transient notifications. Independent of any business logic.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, toast: Toast);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTheme {
    Light,
    Dark,
}

/// Display configuration passed along with a toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close: Duration,
    pub hide_progress_bar: bool,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub theme: ToastTheme,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopLeft,
            auto_close: Duration::from_millis(4000),
            hide_progress_bar: false,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
            theme: ToastTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub options: ToastOptions,
}

/// What a copy request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy.
    Skipped,
    Copied,
    /// Clipboard write failed; no toast was shown.
    Failed(String),
}

pub struct ClipboardNotifier {
    clipboard: Arc<dyn Clipboard>,
    sink: Arc<dyn NotificationSink>,
    options: ToastOptions,
}

impl ClipboardNotifier {
    pub fn new(clipboard: Arc<dyn Clipboard>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            clipboard,
            sink,
            options: ToastOptions::default(),
        }
    }

    /// Copies `text` and, once the clipboard accepted it, raises a toast with
    /// `message` (or [`DEFAULT_COPY_MESSAGE`]).
    ///
    /// Empty text is a no-op: no clipboard write and no toast.
    pub async fn copy(&self, text: &str, message: Option<&str>) -> CopyOutcome {
        if text.is_empty() {
            debug!("nothing to copy");
            return CopyOutcome::Skipped;
        }

        if let Err(e) = self.clipboard.write_text(text).await {
            warn!(error = %e, "clipboard write failed");
            return CopyOutcome::Failed(e);
        }

        self.sink.notify(Toast {
            message: message.unwrap_or(DEFAULT_COPY_MESSAGE).to_string(),
            options: self.options.clone(),
        });
        CopyOutcome::Copied
    }
}
