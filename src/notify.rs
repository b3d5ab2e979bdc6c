//! Transient toast messages
//!
//! Toasts are printed to the terminal and, when requested, mirrored as
//! desktop notifications.

use std::time::Duration;

use colored::Colorize;
use notify_rust::Notification;
use serde::Serialize;

/// Toast lifetime for product and newsletter messages
pub const SHORT_TOAST: Duration = Duration::from_secs(3);
/// Toast lifetime for login and signup messages
pub const LONG_TOAST: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A message shown briefly to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    #[serde(skip)]
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: SHORT_TOAST,
        }
    }

    pub fn lasting(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }

    /// One-line terminal rendering
    pub fn to_line(&self) -> String {
        match self.kind {
            ToastKind::Success => format!("{} {}", "✓".green(), self.message),
            ToastKind::Error => format!("{} {}", "✗".red(), self.message.red()),
            ToastKind::Info => format!("{} {}", "•".blue(), self.message),
        }
    }
}

/// Mirror a toast as a desktop notification
pub fn desktop(toast: &Toast) {
    let icon = match toast.kind {
        ToastKind::Success => "dialog-positive",
        ToastKind::Error => "dialog-error",
        ToastKind::Info => "dialog-information",
    };

    let timeout = i32::try_from(toast.duration.as_millis()).unwrap_or(i32::MAX);
    if let Err(e) = Notification::new()
        .summary("Aktara")
        .body(&toast.message)
        .icon(icon)
        .appname("aktara")
        .timeout(timeout)
        .show()
    {
        tracing::debug!(error = %e, "desktop notification failed");
    }
}
