//! Shared types for motorpool

mod error;

pub use error::{MotorpoolError, Result};
