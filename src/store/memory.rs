//! In-memory record source
//!
//! Fixture-backed implementation of `RecordSource` for tests and dev
//! mode. Collections must be created explicitly; fetching a collection
//! that was never loaded is a data-source error, which doubles as the
//! failure-injection mechanism for orchestrator tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use bson::{Bson, Document};

use crate::store::query::{Query, RecordSource, SortDirection};
use crate::types::{MotorpoolError, Result};

/// In-memory record source
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a collection with the given records
    pub fn load(&self, collection: &str, docs: Vec<Document>) {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        collections.insert(collection.to_string(), docs);
    }

    /// Append a single record to a collection, creating it if needed
    pub fn insert(&self, collection: &str, doc: Document) {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        collections.entry(collection.to_string()).or_default().push(doc);
    }

    /// Drop a collection so that subsequent fetches fail
    pub fn drop_collection(&self, collection: &str) {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        collections.remove(collection);
    }
}

/// Field-value ordering for the sort stage
///
/// Only the types the dashboard sorts on are ordered; everything else
/// compares equal and keeps insertion order.
fn bson_cmp(a: &Bson, b: &Bson) -> Ordering {
    match (a, b) {
        (Bson::DateTime(x), Bson::DateTime(y)) => x.cmp(y),
        (Bson::String(x), Bson::String(y)) => x.cmp(y),
        (Bson::Int32(x), Bson::Int32(y)) => x.cmp(y),
        (Bson::Int64(x), Bson::Int64(y)) => x.cmp(y),
        (Bson::Double(x), Bson::Double(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RecordSource for MemoryStore {
    async fn fetch(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let docs = collections.get(collection).ok_or_else(|| {
            MotorpoolError::DataSource(format!("No such collection: {}", collection))
        })?;

        let mut results: Vec<Document> = docs
            .iter()
            .filter(|doc| {
                query
                    .filters
                    .iter()
                    .all(|(field, value)| doc.get(field) == Some(value))
            })
            .cloned()
            .collect();

        if let Some((field, direction)) = &query.sort {
            results.sort_by(|a, b| {
                let ord = bson_cmp(
                    a.get(field).unwrap_or(&Bson::Null),
                    b.get(field).unwrap_or(&Bson::Null),
                );
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            results.truncate(limit.max(0) as usize);
        }

        Ok(results)
    }
}
