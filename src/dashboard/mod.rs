//! Dashboard service
//!
//! Owns the store handle and the state the presentation layer reads:
//! the summary snapshot, the recent activity windows, and the
//! notification feed. One `refresh()` call runs a full orchestration
//! cycle and commits its outputs atomically; a failed cycle leaves
//! previously committed state untouched.

pub mod orchestrator;
pub mod stats;

pub use orchestrator::{CycleConfig, OrchestrationResult, QueryOrchestrator};
pub use stats::SummaryStats;

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::notify::{synthesize, Notification, NotificationKind, NotificationStore};
use crate::records::{BookingDoc, FeedbackDoc, StatusBreakdown};
use crate::store::RecordSource;
use crate::types::Result;

#[derive(Default)]
struct Snapshot {
    summary: SummaryStats,
    recent_bookings: Vec<BookingDoc>,
    recent_feedbacks: Vec<FeedbackDoc>,
}

/// Dashboard state and refresh driver
pub struct Dashboard {
    orchestrator: QueryOrchestrator,
    config: CycleConfig,
    snapshot: RwLock<Snapshot>,
    notifications: NotificationStore,
}

impl Dashboard {
    pub fn new(store: Arc<dyn RecordSource>, config: CycleConfig) -> Self {
        Self {
            orchestrator: QueryOrchestrator::new(store, config),
            config,
            snapshot: RwLock::new(Snapshot::default()),
            notifications: NotificationStore::new(),
        }
    }

    /// Run one orchestration cycle and commit its outputs
    ///
    /// The summary, recent windows, and notification seed are all
    /// recomputed from the same cycle; on error nothing is applied.
    pub async fn refresh(&self) -> Result<()> {
        let result = self.orchestrator.run().await?;

        let summary = SummaryStats::aggregate(&result);
        let seed = synthesize(
            &summary,
            &result.recent_bookings,
            self.config.low_availability_threshold,
        );
        let seed_len = seed.len();

        {
            let mut snapshot = self
                .snapshot
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            snapshot.summary = summary;
            snapshot.recent_bookings = result.recent_bookings;
            snapshot.recent_feedbacks = result.recent_feedbacks;
        }
        self.notifications.seed(seed);

        info!(
            "Dashboard refreshed: {} vehicles ({} available), {} bookings, {} notifications",
            summary.total_cars, summary.available_cars, summary.total_bookings, seed_len
        );

        Ok(())
    }

    fn read_snapshot(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current summary counts
    pub fn summary(&self) -> SummaryStats {
        self.read_snapshot().summary
    }

    /// Recent bookings, most-recent-first, with display dates
    pub fn recent_bookings(&self) -> Vec<BookingDoc> {
        self.read_snapshot().recent_bookings.clone()
    }

    /// Recent feedback entries, most-recent-first
    pub fn recent_feedbacks(&self) -> Vec<FeedbackDoc> {
        self.read_snapshot().recent_feedbacks.clone()
    }

    /// Per-status counts over the recent booking window
    pub fn status_breakdown(&self) -> StatusBreakdown {
        StatusBreakdown::for_bookings(&self.read_snapshot().recent_bookings)
    }

    /// Current notification feed, most-recent-first
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.snapshot()
    }

    /// Add a user/system-originated notification; returns its id
    pub fn add_notification(&self, message: &str, kind: NotificationKind) -> String {
        self.notifications.add(message, kind)
    }

    /// Dismiss a notification; absent ids are a no-op
    pub fn remove_notification(&self, id: &str) {
        self.notifications.remove(id);
    }

    pub fn mark_notification_read(&self, id: &str) {
        self.notifications.mark_read(id);
    }

    pub fn mark_all_notifications_read(&self) {
        self.notifications.mark_all_read();
    }

    pub fn clear_notifications(&self) {
        self.notifications.clear();
    }

    /// Number of unread notifications
    pub fn unread_notifications(&self) -> usize {
        self.notifications.unread_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LOW_AVAILABILITY_ID;
    use crate::records::{
        BOOKING_COLLECTION, FEEDBACK_COLLECTION, USER_COLLECTION, VEHICLE_COLLECTION,
    };
    use crate::store::MemoryStore;
    use bson::doc;

    /// Fixture for the end-to-end scenario: 2 vehicles (1 available),
    /// 0 owners, 1 customer, 3 bookings, no feedback collection.
    fn scenario_store() -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.load(
            VEHICLE_COLLECTION,
            vec![
                doc! { "_id": "v1", "brand": "Toyota", "status": "Available" },
                doc! { "_id": "v2", "brand": "Honda", "status": "Rented" },
            ],
        );
        store.load(
            USER_COLLECTION,
            vec![doc! { "_id": "u1", "role": "customer", "name": "Ana" }],
        );
        store.load(
            BOOKING_COLLECTION,
            vec![
                doc! {
                    "_id": "b1",
                    "vehicleBrand": "Toyota",
                    "vehicleModel": "Vios",
                    "name": "Ana",
                    "timestamp": bson::DateTime::from_millis(1_000),
                },
                doc! {
                    "_id": "b2",
                    "vehicleBrand": "Honda",
                    "vehicleModel": "City",
                    "name": "Ana",
                    "timestamp": bson::DateTime::from_millis(2_000),
                },
                doc! {
                    "_id": "b3",
                    "vehicleBrand": "Toyota",
                    "vehicleModel": "Wigo",
                    "name": "Ana",
                    "status": "Pending",
                    "timestamp": bson::DateTime::from_millis(3_000),
                },
            ],
        );
        Arc::new(store)
    }

    fn scenario_dashboard() -> Dashboard {
        let config = CycleConfig {
            recent_bookings_limit: 2,
            ..Default::default()
        };
        Dashboard::new(scenario_store(), config)
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let dashboard = scenario_dashboard();

        dashboard.refresh().await.unwrap();

        let summary = dashboard.summary();
        assert_eq!(
            summary,
            SummaryStats {
                total_cars: 2,
                available_cars: 1,
                total_owners: 0,
                total_customers: 1,
                total_bookings: 3,
                total_feedbacks: 0,
            }
        );

        // Two booking infos plus the availability warning, all unread
        let feed = dashboard.notifications();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].id, "booking-b3");
        assert_eq!(feed[1].id, "booking-b2");
        assert_eq!(feed[2].id, LOW_AVAILABILITY_ID);
        assert!(feed.iter().all(|n| !n.read));
        assert_eq!(dashboard.unread_notifications(), 3);
    }

    #[tokio::test]
    async fn test_refresh_reseeds_wholesale() {
        let dashboard = scenario_dashboard();
        dashboard.refresh().await.unwrap();

        dashboard.mark_all_notifications_read();
        let extra = dashboard.add_notification("Audit finished", NotificationKind::Info);
        dashboard.refresh().await.unwrap();

        // Read marks and user entries do not survive a refresh
        let feed = dashboard.notifications();
        assert_eq!(feed.len(), 3);
        assert!(feed.iter().all(|n| !n.read));
        assert!(feed.iter().all(|n| n.id != extra));
    }

    #[tokio::test]
    async fn test_failed_cycle_preserves_previous_state() {
        let store = scenario_store();
        let dashboard = Dashboard::new(
            Arc::clone(&store) as Arc<dyn RecordSource>,
            CycleConfig::default(),
        );
        dashboard.refresh().await.unwrap();
        let before = dashboard.summary();

        store.drop_collection(VEHICLE_COLLECTION);

        assert!(dashboard.refresh().await.is_err());
        assert_eq!(dashboard.summary(), before);
        assert_eq!(dashboard.notifications().len(), 4);
    }

    #[tokio::test]
    async fn test_feedback_collection_appears_in_counts() {
        let store = scenario_store();
        store.load(
            FEEDBACK_COLLECTION,
            vec![
                doc! { "_id": "f1", "createdAt": bson::DateTime::from_millis(10) },
                doc! { "_id": "f2", "createdAt": bson::DateTime::from_millis(20) },
            ],
        );
        let dashboard = Dashboard::new(store, CycleConfig::default());

        dashboard.refresh().await.unwrap();

        assert_eq!(dashboard.summary().total_feedbacks, 2);
        assert_eq!(dashboard.recent_feedbacks()[0].id.as_deref(), Some("f2"));
    }

    #[tokio::test]
    async fn test_status_breakdown_over_recent_window() {
        let dashboard = Dashboard::new(scenario_store(), CycleConfig::default());

        dashboard.refresh().await.unwrap();

        let breakdown = dashboard.status_breakdown();
        assert_eq!(breakdown.pending, 1);
        assert_eq!(breakdown.confirmed, 0);
    }
}
