//! Booking record schema
//!
//! Bookings carry denormalized vehicle and customer fields plus the
//! rental window. The formatted date strings are derived for display
//! and never persisted.

use serde::{Deserialize, Serialize};

/// Collection name for bookings
pub const BOOKING_COLLECTION: &str = "bookings";

/// Booking document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingDoc {
    /// Document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub vehicle_brand: Option<String>,

    pub vehicle_model: Option<String>,

    pub transmission: Option<String>,

    /// Customer name
    pub name: Option<String>,

    /// Customer email
    pub email: Option<String>,

    /// Rental start instant
    pub start_date: Option<bson::DateTime>,

    /// Rental end instant
    pub end_date: Option<bson::DateTime>,

    pub price: Option<f64>,

    /// Free-text booking status
    pub status: Option<String>,

    /// Creation instant, the ordering key for the recent window
    pub timestamp: Option<bson::DateTime>,

    /// Display form of `start_date`; derived, never read from the store
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub start_date_formatted: Option<String>,

    /// Display form of `end_date`; derived, never read from the store
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub end_date_formatted: Option<String>,
}

impl BookingDoc {
    /// Populate the formatted date fields from the raw instants
    ///
    /// Absent instants leave the formatted field unset.
    pub fn derive_formatted_dates(&mut self) {
        self.start_date_formatted = self.start_date.map(display_date);
        self.end_date_formatted = self.end_date.map(display_date);
    }
}

/// Format an instant as a short locale-style date, e.g. "6/8/2026"
pub fn display_date(instant: bson::DateTime) -> String {
    instant.to_chrono().format("%-m/%-d/%Y").to_string()
}

/// Format an instant as a locale-style date-time, e.g. "6/8/2026, 1:05:09 PM"
pub fn display_datetime(instant: bson::DateTime) -> String {
    instant.to_chrono().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-06-08T13:05:09Z
    const JUNE_8: i64 = 1_780_923_909_000;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(bson::DateTime::from_millis(JUNE_8)), "6/8/2026");
    }

    #[test]
    fn test_display_datetime() {
        assert_eq!(
            display_datetime(bson::DateTime::from_millis(JUNE_8)),
            "6/8/2026, 1:05:09 PM"
        );
    }

    #[test]
    fn test_derive_formatted_dates() {
        let mut booking = BookingDoc {
            start_date: Some(bson::DateTime::from_millis(JUNE_8)),
            ..Default::default()
        };

        booking.derive_formatted_dates();

        assert_eq!(booking.start_date_formatted.as_deref(), Some("6/8/2026"));
        assert!(booking.end_date_formatted.is_none());
    }

    #[test]
    fn test_formatted_fields_not_read_from_store() {
        let doc = bson::doc! {
            "_id": "b1",
            "startDateFormatted": "1/1/1970",
        };

        let booking: BookingDoc = bson::from_document(doc).unwrap();

        assert!(booking.start_date_formatted.is_none());
    }
}
