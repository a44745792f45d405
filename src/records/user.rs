//! User record schema

use serde::{Deserialize, Serialize};

/// Collection name for users
pub const USER_COLLECTION: &str = "users";

/// Role value for vehicle owners
pub const ROLE_OWNER: &str = "owner";

/// Role value for renting customers
pub const ROLE_CUSTOMER: &str = "customer";

/// User document
///
/// Only the role participates in aggregation; the profile fields ride
/// along for the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    /// Document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free-text role; recognized values are "owner" and "customer"
    pub role: Option<String>,

    pub name: Option<String>,

    pub email: Option<String>,
}
