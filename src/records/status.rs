//! Booking status classification
//!
//! Maps the free-text status field onto the display categories the
//! dashboard renders. Classification is case-insensitive and total:
//! unrecognized non-empty values pass through as their own display
//! text, absent or empty values display as "Unknown".

use serde::Serialize;

use crate::records::BookingDoc;

/// Display category for a booking status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCategory {
    Active,
    Completed,
    Cancelled,
    Pending,
    /// Unrecognized status, displayed verbatim
    Other(String),
    Unknown,
}

impl StatusCategory {
    /// Classify a raw status value
    pub fn classify(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return Self::Unknown,
        };

        match raw.to_lowercase().as_str() {
            "active" | "confirmed" => Self::Active,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "pending" => Self::Pending,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Display text for the category
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Pending => "Pending",
            Self::Other(text) => text,
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-status counts over the recent booking window
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub pending: u64,
    pub confirmed: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl StatusBreakdown {
    /// Count recent bookings per raw status, case-insensitive
    pub fn for_bookings(bookings: &[BookingDoc]) -> Self {
        let mut breakdown = Self::default();
        for booking in bookings {
            let status = booking.status.as_deref().unwrap_or_default().to_lowercase();
            match status.as_str() {
                "pending" => breakdown.pending += 1,
                "confirmed" => breakdown.confirmed += 1,
                "completed" => breakdown.completed += 1,
                "cancelled" => breakdown.cancelled += 1,
                _ => {}
            }
        }
        breakdown
    }
}
