//! Store query capability
//!
//! A `Query` carries equality filters, an optional sort field, and an
//! optional result limit. `RecordSource` is the seam between the
//! orchestrator and whichever store backs it.

use async_trait::async_trait;
use bson::{Bson, Document};

use crate::types::Result;

/// Sort direction for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A read against a named collection
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Equality filters, all of which must match
    pub filters: Vec<(String, Bson)>,
    /// Optional sort field and direction
    pub sort: Option<(String, SortDirection)>,
    /// Optional cap on the number of returned records
    pub limit: Option<i64>,
}

impl Query {
    /// Query matching every record in the collection
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality filter
    pub fn filter(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }

    /// Sort descending by the given field
    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort = Some((field.to_string(), SortDirection::Descending));
        self
    }

    /// Sort ascending by the given field
    pub fn sort_asc(mut self, field: &str) -> Self {
        self.sort = Some((field.to_string(), SortDirection::Ascending));
        self
    }

    /// Cap the number of returned records
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A queryable document store
///
/// Records are raw field-value documents; field presence is not
/// guaranteed and callers must treat every field as optional.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch records from a named collection
    async fn fetch(&self, collection: &str, query: Query) -> Result<Vec<Document>>;
}
