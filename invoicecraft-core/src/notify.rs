//! Transient notification bus.
//!
//! Replaces ad-hoc global listener lists with an explicit service owned by the
//! application shell and injected into handlers. Publishing is fire-and-forget:
//! a publish never fails the operation that produced it, and events are dropped
//! when no subscriber keeps up.

use serde::Serialize;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Error => "error",
        }
    }
}

/// A transient, user-facing notification (toast equivalent).
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn info(&self, title: &str, description: &str) {
        self.publish(Notification {
            level: NotificationLevel::Info,
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    pub fn error(&self, title: &str, description: &str) {
        self.publish(Notification {
            level: NotificationLevel::Error,
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    fn publish(&self, notification: Notification) {
        tracing::debug!(
            level = notification.level.as_str(),
            title = %notification.title,
            "notification published"
        );
        // send only errors when there are no subscribers; that is fine here
        let _ = self.tx.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_notification() {
        let notifier = Notifier::new(8);
        let mut rx = notifier.subscribe();

        notifier.info("Saved", "Your changes have been saved.");

        let received = rx.recv().await.expect("notification lost");
        assert_eq!(received.level, NotificationLevel::Info);
        assert_eq!(received.title, "Saved");
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let notifier = Notifier::new(8);
        notifier.error("Save Failed", "Could not save the document.");
    }

    #[tokio::test]
    async fn each_subscriber_gets_its_own_copy() {
        let notifier = Notifier::new(8);
        let mut a = notifier.subscribe();
        let mut b = notifier.subscribe();

        notifier.info("Terms Auto-Saved", "done");

        assert_eq!(a.recv().await.expect("lost").title, "Terms Auto-Saved");
        assert_eq!(b.recv().await.expect("lost").title, "Terms Auto-Saved");
    }
}
