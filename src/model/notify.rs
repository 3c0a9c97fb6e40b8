//! Toast notifications and the error log

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);
/// Errors beyond this count are dropped, oldest first
pub const MAX_ERRORS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Queue of live toasts, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        self.items.push_back(Toast {
            level,
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        });
    }

    /// Drop every toast whose time is up
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl ErrorReport {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Errors that reached the root without being handled, newest first
#[derive(Debug, Default)]
pub struct ErrorLog {
    reports: VecDeque<ErrorReport>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: &anyhow::Error) {
        tracing::error!("{:#}", error);
        self.reports.push_front(ErrorReport {
            message: format!("{:#}", error),
            timestamp: Local::now(),
        });
        self.reports.truncate(MAX_ERRORS);
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorReport> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
