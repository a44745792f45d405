//! Feedback record schema

use serde::{Deserialize, Serialize};

/// Collection name for feedbacks
///
/// Deployments may not have this collection at all; reads against it
/// are tolerated failures.
pub const FEEDBACK_COLLECTION: &str = "feedbacks";

/// Feedback document
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDoc {
    /// Document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub comment: Option<String>,

    pub rating: Option<i32>,

    /// Creation instant, the ordering key for the recent window
    pub created_at: Option<bson::DateTime>,
}
