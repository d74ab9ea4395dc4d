//! Store change notifications.
//!
//! Every mutating store operation emits a [`StoreEvent`] so bound views
//! can reconcile with storage without re-polling after each call.

use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};

use serde::{Deserialize, Serialize};

/// Change notifications emitted by the stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A new personality was saved.
    PersonalityCreated { id: String },
    /// An existing personality was patched.
    PersonalityUpdated { id: String },
    /// A personality was removed.
    PersonalityDeleted { id: String },
    /// A personality's last-used time (and possibly use count) changed.
    PersonalityUsed { id: String },
    /// A personality's favorite flag was flipped.
    FavoriteToggled { id: String, favorite: bool },
    /// The preference record changed.
    PreferencesChanged,
}

/// A registry of change subscribers.
///
/// Emission is best-effort: a subscriber that dropped its receiver is
/// pruned on the next emit, and a slow subscriber never blocks the store
/// (the channel is unbounded).
#[derive(Default)]
pub struct ChangeFeed {
    senders: Mutex<Vec<Sender<StoreEvent>>>,
}

impl ChangeFeed {
    /// Creates a feed with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and returns its receiving end.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        let mut senders = self.senders.lock().unwrap_or_else(|e| e.into_inner());
        senders.push(tx);
        rx
    }

    /// Delivers `event` to all live subscribers.
    pub fn emit(&self, event: StoreEvent) {
        let mut senders = self.senders.lock().unwrap_or_else(|e| e.into_inner());
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_event() {
        let feed = ChangeFeed::new();
        let rx = feed.subscribe();

        feed.emit(StoreEvent::PreferencesChanged);

        assert_eq!(rx.try_recv().unwrap(), StoreEvent::PreferencesChanged);
    }

    #[test]
    fn test_all_subscribers_receive_event() {
        let feed = ChangeFeed::new();
        let rx1 = feed.subscribe();
        let rx2 = feed.subscribe();

        let event = StoreEvent::PersonalityDeleted {
            id: "p-1".to_string(),
        };
        feed.emit(event.clone());

        assert_eq!(rx1.try_recv().unwrap(), event);
        assert_eq!(rx2.try_recv().unwrap(), event);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let feed = ChangeFeed::new();
        let rx1 = feed.subscribe();
        let rx2 = feed.subscribe();
        drop(rx1);

        feed.emit(StoreEvent::PreferencesChanged);

        assert_eq!(rx2.try_recv().unwrap(), StoreEvent::PreferencesChanged);
        let senders = feed.senders.lock().unwrap();
        assert_eq!(senders.len(), 1);
    }
}
