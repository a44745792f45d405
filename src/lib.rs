//! Motorpool - vehicle-rental dashboard core
//!
//! Aggregation and notification-synthesis engine behind a rental
//! operations dashboard: pulls raw records from a document store,
//! reduces them to summary statistics, classifies booking statuses
//! for display, and maintains a transient in-memory notification
//! feed.
//!
//! ## Modules
//!
//! - **store**: document-store access behind the `RecordSource` trait
//! - **records**: schemas for vehicles, users, bookings, feedbacks
//! - **dashboard**: query orchestration, aggregation, and the service facade
//! - **notify**: notification synthesis and the mutable feed

pub mod config;
pub mod dashboard;
pub mod notify;
pub mod records;
pub mod store;
pub mod types;

pub use config::Args;
pub use dashboard::{CycleConfig, Dashboard, SummaryStats};
pub use types::{MotorpoolError, Result};
