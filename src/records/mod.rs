//! Record schemas
//!
//! Document structures for the collections the dashboard reads:
//! vehicles, users, bookings, and feedbacks. Every data field is
//! optional-tolerant; the store does not guarantee field presence.

mod booking;
mod feedback;
mod status;
mod user;
mod vehicle;

pub use booking::{display_date, display_datetime, BookingDoc, BOOKING_COLLECTION};
pub use feedback::{FeedbackDoc, FEEDBACK_COLLECTION};
pub use status::{StatusBreakdown, StatusCategory};
pub use user::{UserDoc, ROLE_CUSTOMER, ROLE_OWNER, USER_COLLECTION};
pub use vehicle::{VehicleDoc, STATUS_AVAILABLE, VEHICLE_COLLECTION};

use bson::Document;
use serde::de::DeserializeOwned;

use crate::types::Result;

/// Decode raw store documents into a typed record list
pub fn decode_records<T: DeserializeOwned>(docs: Vec<Document>) -> Result<Vec<T>> {
    docs.into_iter()
        .map(|doc| bson::from_document(doc).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let docs = vec![doc! { "_id": "v1" }];

        let vehicles: Vec<VehicleDoc> = decode_records(docs).unwrap();

        assert_eq!(vehicles[0].id.as_deref(), Some("v1"));
        assert!(vehicles[0].status.is_none());
    }

    #[test]
    fn test_decode_rejects_mistyped_fields() {
        let docs = vec![doc! { "_id": "v1", "brand": 42 }];

        let result: Result<Vec<VehicleDoc>> = decode_records(docs);

        assert!(result.is_err());
    }
}
