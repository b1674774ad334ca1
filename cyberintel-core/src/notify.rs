//! Toast notification queue.
//!
//! Notifications live for a fixed display window, then fade briefly, then
//! disappear. Expiry is driven by [`NotificationQueue::tick`] with an
//! injected `Instant`, so the queue itself never reads a clock and tests
//! never sleep. The queue is insertion-ordered (oldest first) and
//! deliberately unbounded; removal happens on schedule regardless of which
//! view is active.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// How long a toast is fully visible.
pub const DISPLAY_FOR: Duration = Duration::from_millis(3500);

/// Additional fade-out time before removal.
pub const FADE_FOR: Duration = Duration::from_millis(400);

/// Notification severity, drives icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

/// Display phase of one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
}

/// One transient user-visible message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

impl Notification {
    fn new(message: String, severity: Severity, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            severity,
            created: now,
        }
    }

    /// Phase at `now`. `None` once the toast has fully expired.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Option<Phase> {
        let age = now.saturating_duration_since(self.created);
        if age < DISPLAY_FOR {
            Some(Phase::Visible)
        } else if age < DISPLAY_FOR + FADE_FOR {
            Some(Phase::Fading)
        } else {
            None
        }
    }
}

/// Insertion-ordered queue of live toasts.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast with an explicit severity.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.items
            .push(Notification::new(message.into(), severity, now));
    }

    /// Append a success toast (the default severity).
    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Error, now);
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Warning, now);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, Severity::Info, now);
    }

    /// Drop every toast whose fade window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.items.retain(|n| n.phase(now).is_some());
    }

    /// Live toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with_one(now: Instant) -> NotificationQueue {
        let mut queue = NotificationQueue::new();
        queue.push("scan complete", Severity::Success, now);
        queue
    }

    #[test]
    fn fresh_notification_is_visible() {
        let now = Instant::now();
        let queue = queue_with_one(now);
        assert_eq!(queue.items()[0].phase(now), Some(Phase::Visible));
    }

    #[test]
    fn fades_after_display_window() {
        let now = Instant::now();
        let queue = queue_with_one(now);
        let later = now + DISPLAY_FOR + Duration::from_millis(1);
        assert_eq!(queue.items()[0].phase(later), Some(Phase::Fading));
    }

    #[test]
    fn removed_after_fade_window() {
        let now = Instant::now();
        let mut queue = queue_with_one(now);
        let later = now + DISPLAY_FOR + FADE_FOR + Duration::from_millis(1);
        queue.tick(later);
        assert!(queue.is_empty());
    }

    #[test]
    fn tick_keeps_younger_toasts() {
        let now = Instant::now();
        let mut queue = queue_with_one(now);
        let mid = now + Duration::from_secs(2);
        queue.push("second", Severity::Info, mid);

        // First expires, second is still fading/visible.
        let later = now + DISPLAY_FOR + FADE_FOR + Duration::from_millis(1);
        queue.tick(later);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].message, "second");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.warning("first", now);
        queue.error("second", now);
        queue.info("third", now);
        let messages: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn severities_map_to_helpers() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.success("a", now);
        queue.error("b", now);
        queue.warning("c", now);
        queue.info("d", now);
        let severities: Vec<_> = queue.items().iter().map(|n| n.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Success,
                Severity::Error,
                Severity::Warning,
                Severity::Info
            ]
        );
    }
}
