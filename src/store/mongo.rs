//! MongoDB-backed record source

use async_trait::async_trait;
use bson::Document;
use futures_util::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Client, Database};
use tracing::info;

use crate::store::query::{Query, RecordSource, SortDirection};
use crate::types::{MotorpoolError, Result};

/// MongoDB client wrapper implementing `RecordSource`
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to MongoDB and verify the connection
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri).await.map_err(|e| {
            MotorpoolError::DataSource(format!("Failed to connect to MongoDB: {}", e))
        })?;

        let db = client.database(db_name);

        // Verify connection with timeout
        db.run_command(bson::doc! { "ping": 1 })
            .await
            .map_err(|e| MotorpoolError::DataSource(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self { db })
    }
}

#[async_trait]
impl RecordSource for MongoStore {
    async fn fetch(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
        let mut filter = Document::new();
        for (field, value) in query.filters {
            filter.insert(field, value);
        }

        let sort = query.sort.map(|(field, direction)| {
            let dir = match direction {
                SortDirection::Ascending => 1,
                SortDirection::Descending => -1,
            };
            bson::doc! { field: dir }
        });
        let options = FindOptions::builder()
            .sort(sort)
            .limit(query.limit)
            .build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| {
                MotorpoolError::DataSource(format!("Find on '{}' failed: {}", collection, e))
            })?;

        cursor.try_collect().await.map_err(|e| {
            MotorpoolError::DataSource(format!("Cursor on '{}' failed: {}", collection, e))
        })
    }
}
