//! Notification synthesis
//!
//! Derives the seed feed for one cycle from recent activity and
//! threshold conditions. Deterministic over its inputs and never
//! merged with existing state; seeding replaces the feed wholesale.

use crate::dashboard::SummaryStats;
use crate::notify::{Notification, NotificationKind};
use crate::records::{display_datetime, BookingDoc};

/// How many recent bookings get a seed notification
pub const SEED_BOOKING_WINDOW: usize = 3;

/// Fixed id of the low-availability alert
pub const LOW_AVAILABILITY_ID: &str = "low-availability";

/// Synthesize the seed feed from one cycle's outputs
///
/// Booking entries come first, most-recent-first; the availability
/// alert, when triggered, is appended exactly once at the end. All
/// entries start unread.
pub fn synthesize(
    stats: &SummaryStats,
    recent_bookings: &[BookingDoc],
    low_availability_threshold: u64,
) -> Vec<Notification> {
    let mut feed = Vec::new();

    for (index, booking) in recent_bookings.iter().take(SEED_BOOKING_WINDOW).enumerate() {
        let brand = booking.vehicle_brand.as_deref().unwrap_or("Vehicle");
        let model = booking.vehicle_model.as_deref().unwrap_or("");
        let name = booking.name.as_deref().unwrap_or("Customer");

        let time = match booking.timestamp {
            Some(instant) => display_datetime(instant),
            None => format!("{} hours ago", index + 1),
        };

        feed.push(Notification {
            id: format!("booking-{}", booking.id.as_deref().unwrap_or_default()),
            message: format!("New booking: {} {} by {}", brand, model, name),
            time,
            read: false,
            kind: NotificationKind::Info,
        });
    }

    if stats.available_cars < low_availability_threshold {
        feed.push(Notification {
            id: LOW_AVAILABILITY_ID.to_string(),
            message: format!(
                "Low vehicle availability alert: Only {} vehicles available",
                stats.available_cars
            ),
            time: "Today".to_string(),
            read: false,
            kind: NotificationKind::Warning,
        });
    }

    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, brand: Option<&str>, name: Option<&str>) -> BookingDoc {
        BookingDoc {
            id: Some(id.to_string()),
            vehicle_brand: brand.map(str::to_string),
            vehicle_model: brand.map(|_| "Vios".to_string()),
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn stats_with_available(available_cars: u64) -> SummaryStats {
        SummaryStats {
            available_cars,
            ..Default::default()
        }
    }

    #[test]
    fn test_booking_window_caps_at_three() {
        let bookings: Vec<BookingDoc> = ["b1", "b2", "b3", "b4", "b5"]
            .iter()
            .map(|id| booking(id, Some("Toyota"), Some("Ana")))
            .collect();

        let feed = synthesize(&stats_with_available(9), &bookings, 3);

        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].id, "booking-b1");
        assert_eq!(feed[2].id, "booking-b3");
        assert!(feed.iter().all(|n| !n.read));
        assert!(feed.iter().all(|n| n.kind == NotificationKind::Info));
    }

    #[test]
    fn test_message_uses_placeholders_for_missing_fields() {
        let bookings = vec![booking("b1", None, None)];

        let feed = synthesize(&stats_with_available(9), &bookings, 3);

        assert_eq!(feed[0].message, "New booking: Vehicle  by Customer");
    }

    #[test]
    fn test_time_label_falls_back_to_position() {
        let bookings = vec![
            booking("b1", Some("Toyota"), Some("Ana")),
            booking("b2", Some("Honda"), Some("Ben")),
        ];

        let feed = synthesize(&stats_with_available(9), &bookings, 3);

        assert_eq!(feed[0].time, "1 hours ago");
        assert_eq!(feed[1].time, "2 hours ago");
    }

    #[test]
    fn test_time_label_prefers_booking_timestamp() {
        let mut with_ts = booking("b1", Some("Toyota"), Some("Ana"));
        with_ts.timestamp = Some(bson::DateTime::from_millis(0));

        let feed = synthesize(&stats_with_available(9), &[with_ts], 3);

        assert_eq!(feed[0].time, "1/1/1970, 12:00:00 AM");
    }

    #[test]
    fn test_alert_fires_below_threshold_and_comes_last() {
        let bookings = vec![booking("b1", Some("Toyota"), Some("Ana"))];

        let feed = synthesize(&stats_with_available(2), &bookings, 3);

        assert_eq!(feed.len(), 2);
        let alert = feed.last().unwrap();
        assert_eq!(alert.id, LOW_AVAILABILITY_ID);
        assert_eq!(alert.kind, NotificationKind::Warning);
        assert_eq!(alert.time, "Today");
        assert_eq!(
            alert.message,
            "Low vehicle availability alert: Only 2 vehicles available"
        );
    }

    #[test]
    fn test_alert_absent_at_threshold() {
        let feed = synthesize(&stats_with_available(3), &[], 3);

        assert!(feed.is_empty());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let bookings = vec![
            booking("b1", Some("Toyota"), Some("Ana")),
            booking("b2", None, Some("Ben")),
        ];
        let stats = stats_with_available(1);

        assert_eq!(
            synthesize(&stats, &bookings, 3),
            synthesize(&stats, &bookings, 3)
        );
    }
}
