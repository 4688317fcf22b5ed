//! Transient toast notifications.
//!
//! Toasts live in a queue with a fixed time-to-live and are pruned on
//! every tick; nothing is persisted.

use std::collections::VecDeque;
use std::fmt::Display;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// At most this many toasts are shown at once; older ones are dropped.
const MAX_TOASTS: usize = 4;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action or rejected input.
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message shown to the user.
    pub message: String,
    /// Severity.
    pub level: ToastLevel,
    expires_at: Instant,
}

/// FIFO queue of live toasts.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// Queue an informational toast.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    /// Queue a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    /// Queue an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    /// Drop expired toasts; called once per tick.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.queue.retain(|toast| toast.expires_at > now);
    }

    /// Live toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Whether any toast is live.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Best-effort user-facing message for any error value.
pub fn error_message(err: &impl Display) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_queue_in_order() {
        let mut toasts = Toasts::new();
        toasts.info("a");
        toasts.error("b");
        let messages: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["a", "b"]);
    }

    #[test]
    fn queue_is_bounded() {
        let mut toasts = Toasts::new();
        for n in 0..10 {
            toasts.info(format!("{n}"));
        }
        assert_eq!(toasts.iter().count(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().unwrap().message, "6");
    }

    #[test]
    fn prune_keeps_fresh_toasts() {
        let mut toasts = Toasts::new();
        toasts.info("fresh");
        toasts.prune();
        assert!(!toasts.is_empty());
    }

    #[test]
    fn error_message_stringifies() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(error_message(&err), "boom");
    }
}
