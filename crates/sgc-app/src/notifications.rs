//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Oldest notifications are dropped beyond this many
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub created_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
            ttl: NOTIFICATION_TTL,
        }
    }
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, text: impl Into<String>) {
        if self.items.len() == MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            level,
            text: text.into(),
            created_at: Instant::now(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NotificationLevel::Success, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(NotificationLevel::Info, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(NotificationLevel::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NotificationLevel::Error, text);
    }

    /// Drop everything older than the TTL as of `now`
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any visible notification has `level` and contains `needle`
    pub fn contains(&self, level: NotificationLevel, needle: &str) -> bool {
        self.items
            .iter()
            .any(|n| n.level == level && n.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut notifications = Notifications::default();
        notifications.success("saved");
        notifications.error("boom");
        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
        assert!(notifications.contains(NotificationLevel::Success, "saved"));
        assert!(!notifications.contains(NotificationLevel::Warning, "saved"));
    }

    #[test]
    fn test_expire_drops_old_entries() {
        let mut notifications = Notifications::default();
        notifications.info("hello");
        notifications.expire(Instant::now());
        assert_eq!(notifications.len(), 1);

        notifications.expire(Instant::now() + NOTIFICATION_TTL + Duration::from_millis(1));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut notifications = Notifications::default();
        for i in 0..(MAX_VISIBLE + 2) {
            notifications.info(format!("n{}", i));
        }
        assert_eq!(notifications.len(), MAX_VISIBLE);
        assert_eq!(notifications.iter().next().map(|n| n.text.as_str()), Some("n2"));
    }
}
