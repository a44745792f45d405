//! Configuration for motorpool
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;

use crate::types::MotorpoolError;

/// Motorpool - vehicle-rental dashboard aggregation service
#[derive(Parser, Debug, Clone)]
#[command(name = "motorpool")]
#[command(about = "Aggregation and notification core for a vehicle-rental dashboard")]
pub struct Args {
    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "motorpool")]
    pub mongodb_db: String,

    /// Enable development mode (in-memory store, no MongoDB required)
    #[arg(long, env = "DEV_MODE", default_value = "false")]
    pub dev_mode: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Vehicle count below which a low-availability alert is raised
    #[arg(long, env = "LOW_AVAILABILITY_THRESHOLD", default_value = "3")]
    pub low_availability_threshold: u64,

    /// How many recent bookings to fetch per cycle
    #[arg(long, env = "RECENT_BOOKINGS_LIMIT", default_value = "5")]
    pub recent_bookings_limit: i64,

    /// How many recent feedback entries to fetch per cycle
    #[arg(long, env = "RECENT_FEEDBACKS_LIMIT", default_value = "3")]
    pub recent_feedbacks_limit: i64,
}

impl Args {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), MotorpoolError> {
        if self.recent_bookings_limit <= 0 {
            return Err(MotorpoolError::Config(
                "recent-bookings-limit must be positive".into(),
            ));
        }

        if self.recent_feedbacks_limit <= 0 {
            return Err(MotorpoolError::Config(
                "recent-feedbacks-limit must be positive".into(),
            ));
        }

        if !self.dev_mode && self.mongodb_uri.is_empty() {
            return Err(MotorpoolError::Config("mongodb-uri is required".into()));
        }

        Ok(())
    }

    /// Orchestration settings derived from the arguments
    pub fn cycle_config(&self) -> crate::dashboard::CycleConfig {
        crate::dashboard::CycleConfig {
            low_availability_threshold: self.low_availability_threshold,
            recent_bookings_limit: self.recent_bookings_limit,
            recent_feedbacks_limit: self.recent_feedbacks_limit,
        }
    }
}
