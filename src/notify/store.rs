//! Notification state store
//!
//! Holds the mutable feed for the process lifetime. The sequence and
//! its unread count are guarded by a single mutex so the invariant
//! `unread == |{n : !n.read}|` holds across threads.

use std::sync::{Mutex, PoisonError};

use crate::notify::{Notification, NotificationKind};

#[derive(Default)]
struct Inner {
    /// Most-recent-first
    items: Vec<Notification>,
    unread: usize,
    next_user_id: u64,
}

/// In-memory notification feed
#[derive(Default)]
pub struct NotificationStore {
    inner: Mutex<Inner>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the feed with a fresh seed
    ///
    /// Seeded entries are unread by construction, so the count is
    /// recomputed from the list itself.
    pub fn seed(&self, list: Vec<Notification>) {
        let mut inner = self.lock();
        inner.unread = list.iter().filter(|n| !n.read).count();
        inner.items = list;
    }

    /// Prepend a new notification and return its id
    pub fn add(&self, message: &str, kind: NotificationKind) -> String {
        let mut inner = self.lock();
        inner.next_user_id += 1;
        let id = format!("user-{}", inner.next_user_id);

        inner.items.insert(
            0,
            Notification {
                id: id.clone(),
                message: message.to_string(),
                time: "Just now".to_string(),
                read: false,
                kind,
            },
        );
        inner.unread += 1;

        id
    }

    /// Remove the entry with the given id
    ///
    /// Removing an absent id is a no-op, not an error.
    pub fn remove(&self, id: &str) {
        let mut inner = self.lock();
        if let Some(pos) = inner.items.iter().position(|n| n.id == id) {
            let removed = inner.items.remove(pos);
            if !removed.read {
                inner.unread = inner.unread.saturating_sub(1);
            }
        }
    }

    /// Mark one entry read
    pub fn mark_read(&self, id: &str) {
        let mut inner = self.lock();
        let mut changed = false;
        if let Some(entry) = inner.items.iter_mut().find(|n| n.id == id) {
            if !entry.read {
                entry.read = true;
                changed = true;
            }
        }
        if changed {
            inner.unread = inner.items.iter().filter(|n| !n.read).count();
        }
    }

    /// Mark every entry read
    pub fn mark_all_read(&self) {
        let mut inner = self.lock();
        for entry in &mut inner.items {
            entry.read = true;
        }
        inner.unread = 0;
    }

    /// Empty the feed
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.items.clear();
        inner.unread = 0;
    }

    /// Number of unread entries
    pub fn unread_count(&self) -> usize {
        self.lock().unread
    }

    /// Snapshot of the feed, most-recent-first
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }
}
