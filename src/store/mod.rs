//! Record store access
//!
//! The dashboard reads from an external document store through the
//! `RecordSource` trait: named collections queried by equality filter,
//! sort field, and result limit. `MongoStore` is the production
//! implementation; `MemoryStore` backs tests and dev mode.

pub mod memory;
pub mod mongo;
pub mod query;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use query::{Query, RecordSource, SortDirection};
