//! Vehicle record schema

use serde::{Deserialize, Serialize};

/// Collection name for vehicles
pub const VEHICLE_COLLECTION: &str = "vehicles";

/// Status value marking a vehicle as rentable
///
/// Availability counting matches this exactly, case-sensitive.
pub const STATUS_AVAILABLE: &str = "Available";

/// Vehicle document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDoc {
    /// Document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub brand: Option<String>,

    pub model: Option<String>,

    pub transmission: Option<String>,

    /// Free-text availability status
    pub status: Option<String>,
}

impl VehicleDoc {
    /// Whether this vehicle counts as available
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(STATUS_AVAILABLE)
    }
}
