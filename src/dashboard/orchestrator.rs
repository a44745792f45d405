//! Query orchestration
//!
//! Issues one cycle's worth of reads against the record store. The
//! required reads run concurrently and fail as a unit; the feedback
//! read is isolated and degrades to an empty list, since deployments
//! may not have that collection at all.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::records::{
    decode_records, BookingDoc, FeedbackDoc, UserDoc, VehicleDoc, BOOKING_COLLECTION,
    FEEDBACK_COLLECTION, ROLE_CUSTOMER, ROLE_OWNER, USER_COLLECTION, VEHICLE_COLLECTION,
};
use crate::store::{Query, RecordSource};
use crate::types::Result;

/// Windows and thresholds for one orchestration cycle
#[derive(Debug, Clone, Copy)]
pub struct CycleConfig {
    /// Vehicle count below which the availability alert fires
    pub low_availability_threshold: u64,
    /// Size of the recent-bookings window
    pub recent_bookings_limit: i64,
    /// Size of the recent-feedbacks window
    pub recent_feedbacks_limit: i64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            low_availability_threshold: 3,
            recent_bookings_limit: 5,
            recent_feedbacks_limit: 3,
        }
    }
}

/// Record sets fetched by one orchestration cycle
#[derive(Debug, Clone, Default)]
pub struct OrchestrationResult {
    pub vehicles: Vec<VehicleDoc>,
    pub owners: Vec<UserDoc>,
    pub customers: Vec<UserDoc>,
    /// Count of the full booking collection, independent of the
    /// recent window
    pub total_bookings: u64,
    /// Most-recent-first, with derived display dates populated
    pub recent_bookings: Vec<BookingDoc>,
    /// Most-recent-first; empty when the collection is absent
    pub recent_feedbacks: Vec<FeedbackDoc>,
}

/// Runs the fixed read set against the store
pub struct QueryOrchestrator {
    store: Arc<dyn RecordSource>,
    config: CycleConfig,
}

impl QueryOrchestrator {
    pub fn new(store: Arc<dyn RecordSource>, config: CycleConfig) -> Self {
        Self { store, config }
    }

    /// Run one full orchestration cycle
    ///
    /// All reads are issued concurrently. A failure in any required
    /// read fails the cycle as a whole; the caller must not apply
    /// partial results.
    pub async fn run(&self) -> Result<OrchestrationResult> {
        let required = async {
            tokio::try_join!(
                self.fetch_vehicles(),
                self.fetch_users_by_role(ROLE_OWNER),
                self.fetch_users_by_role(ROLE_CUSTOMER),
                self.count_bookings(),
                self.fetch_recent_bookings(),
            )
        };

        // Isolated read: a missing collection or failed fetch is
        // replaced by an empty window, never surfaced.
        let tolerated = async {
            match self.fetch_recent_feedbacks().await {
                Ok(feedbacks) => feedbacks,
                Err(e) => {
                    warn!("Feedback read failed, continuing without: {}", e);
                    Vec::new()
                }
            }
        };

        let (required, recent_feedbacks) = tokio::join!(required, tolerated);
        let (vehicles, owners, customers, total_bookings, mut recent_bookings) = required?;

        for booking in &mut recent_bookings {
            booking.derive_formatted_dates();
        }

        debug!(
            "Cycle fetched {} vehicles, {} owners, {} customers, {} bookings ({} recent), {} feedbacks",
            vehicles.len(),
            owners.len(),
            customers.len(),
            total_bookings,
            recent_bookings.len(),
            recent_feedbacks.len()
        );

        Ok(OrchestrationResult {
            vehicles,
            owners,
            customers,
            total_bookings,
            recent_bookings,
            recent_feedbacks,
        })
    }

    async fn fetch_vehicles(&self) -> Result<Vec<VehicleDoc>> {
        let docs = self.store.fetch(VEHICLE_COLLECTION, Query::all()).await?;
        decode_records(docs)
    }

    async fn fetch_users_by_role(&self, role: &str) -> Result<Vec<UserDoc>> {
        let docs = self
            .store
            .fetch(USER_COLLECTION, Query::all().filter("role", role))
            .await?;
        decode_records(docs)
    }

    async fn count_bookings(&self) -> Result<u64> {
        let docs = self
            .store
            .fetch(BOOKING_COLLECTION, Query::all().sort_desc("timestamp"))
            .await?;
        Ok(docs.len() as u64)
    }

    async fn fetch_recent_bookings(&self) -> Result<Vec<BookingDoc>> {
        let docs = self
            .store
            .fetch(
                BOOKING_COLLECTION,
                Query::all()
                    .sort_desc("timestamp")
                    .limit(self.config.recent_bookings_limit),
            )
            .await?;
        decode_records(docs)
    }

    async fn fetch_recent_feedbacks(&self) -> Result<Vec<FeedbackDoc>> {
        let docs = self
            .store
            .fetch(
                FEEDBACK_COLLECTION,
                Query::all()
                    .sort_desc("createdAt")
                    .limit(self.config.recent_feedbacks_limit),
            )
            .await?;
        decode_records(docs)
    }
}
