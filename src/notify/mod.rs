//! Notification feed
//!
//! Transient, in-memory notifications: a seed synthesized from each
//! orchestration cycle plus user/system-originated entries. Nothing
//! here survives a process restart.

mod store;
mod synth;

pub use store::NotificationStore;
pub use synth::{synthesize, LOW_AVAILABILITY_ID, SEED_BOOKING_WINDOW};

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// A single feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique within the store's lifetime. Synthesized entries use
    /// "booking-<id>" or a fixed alert key; user-originated entries
    /// use a counter-derived token that cannot collide with those.
    pub id: String,

    pub message: String,

    /// Display time label, e.g. a formatted instant or "Just now"
    pub time: String,

    #[serde(default)]
    pub read: bool,

    #[serde(rename = "type")]
    pub kind: NotificationKind,
}
