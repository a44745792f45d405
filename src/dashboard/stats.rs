//! Summary statistics
//!
//! Count-based reduction of one orchestration cycle's record sets.

use serde::Serialize;

use crate::dashboard::orchestrator::OrchestrationResult;

/// Aggregate counts for the dashboard header
///
/// Recomputed wholesale on every cycle; never merged with a previous
/// snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_cars: u64,
    pub available_cars: u64,
    pub total_owners: u64,
    pub total_customers: u64,
    pub total_bookings: u64,
    pub total_feedbacks: u64,
}

impl SummaryStats {
    /// Reduce an orchestration result to summary counts
    ///
    /// Total over its input: every field is populated, empty lists
    /// count as zero. Availability matches the status value exactly,
    /// case-sensitive, unlike the display classifier.
    pub fn aggregate(result: &OrchestrationResult) -> Self {
        Self {
            total_cars: result.vehicles.len() as u64,
            available_cars: result.vehicles.iter().filter(|v| v.is_available()).count() as u64,
            total_owners: result.owners.len() as u64,
            total_customers: result.customers.len() as u64,
            total_bookings: result.total_bookings,
            total_feedbacks: result.recent_feedbacks.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{UserDoc, VehicleDoc};

    fn vehicle(status: Option<&str>) -> VehicleDoc {
        VehicleDoc {
            status: status.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_match_input_lengths() {
        let result = OrchestrationResult {
            vehicles: vec![vehicle(Some("Available")), vehicle(Some("Rented"))],
            owners: vec![],
            customers: vec![UserDoc::default()],
            total_bookings: 7,
            recent_bookings: vec![],
            recent_feedbacks: vec![],
        };

        let stats = SummaryStats::aggregate(&result);

        assert_eq!(stats.total_cars, 2);
        assert_eq!(stats.available_cars, 1);
        assert_eq!(stats.total_owners, 0);
        assert_eq!(stats.total_customers, 1);
        assert_eq!(stats.total_bookings, 7);
        assert_eq!(stats.total_feedbacks, 0);
    }

    #[test]
    fn test_availability_requires_exact_case() {
        let result = OrchestrationResult {
            vehicles: vec![
                vehicle(Some("Available")),
                vehicle(Some("available")),
                vehicle(Some("AVAILABLE")),
                vehicle(None),
            ],
            ..Default::default()
        };

        let stats = SummaryStats::aggregate(&result);

        assert_eq!(stats.total_cars, 4);
        assert_eq!(stats.available_cars, 1);
    }

    #[test]
    fn test_empty_result_is_all_zeros() {
        let stats = SummaryStats::aggregate(&OrchestrationResult::default());

        assert_eq!(stats, SummaryStats::default());
    }
}
